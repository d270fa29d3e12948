//! Tree scanner: walks a host snapshot tree looking for marker text.
//!
//! Two modes, selected by [`DetectionPolicy`]: a full-tree containment
//! search for one phrase, and a top-region collection that requires two
//! independent markers. Scanning is total — malformed nodes degrade to
//! "no match", never to an error.

pub mod handler;
pub mod text;
pub mod types;

pub use handler::{MAX_SCAN_DEPTH, collect_region_text, contains_marker, scan};
pub use text::{contains_normalized, normalize};
pub use types::DetectionPolicy;
