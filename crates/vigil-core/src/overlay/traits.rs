//! Host seams for the overlay controller.
//!
//! The platform supplies a window surface (add/remove view) and global
//! actions (navigate home); the controller never touches the host directly.

use super::errors::SurfaceError;
use super::types::{LayoutParams, ViewHandle};

/// Host window surface: attach and detach overlay views
pub trait WindowSurface {
    fn attach(&mut self, params: &LayoutParams) -> Result<ViewHandle, SurfaceError>;
    fn detach(&mut self, handle: ViewHandle) -> Result<(), SurfaceError>;
}

/// Host-level global actions
pub trait HostActions {
    /// Return the user to the home screen / launcher
    fn navigate_home(&mut self) -> Result<(), SurfaceError>;
}
