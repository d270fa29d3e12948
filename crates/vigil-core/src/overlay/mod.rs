//! Overlay controller: a Hidden/Shown toggle over a host window surface.

pub mod errors;
pub mod handler;
pub mod sim;
pub mod traits;
pub mod types;

pub use errors::SurfaceError;
pub use handler::OverlayController;
pub use sim::{SimulatedActions, SimulatedSurface};
pub use traits::{HostActions, WindowSurface};
pub use types::{
    Dimension, Gravity, LayoutParams, OverlayState, PixelFormat, ViewHandle, WindowKind,
};
