//! Watcher service: the event-driven gate/scan/toggle pipeline.

pub mod handler;
pub mod types;

pub use handler::Watcher;
pub use types::{EventKind, UiEvent, Verdict};
