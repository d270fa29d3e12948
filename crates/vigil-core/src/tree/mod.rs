//! Element tree model: the host seam (`UiNode`) and an owned snapshot
//! implementation for fixtures and offline replay.

pub mod errors;
pub mod snapshot;
pub mod types;

pub use errors::NodeAccessError;
pub use snapshot::SnapshotNode;
pub use types::{Bounds, UiNode};
