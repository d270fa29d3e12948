use serde::{Deserialize, Serialize};

use super::errors::NodeAccessError;

/// Screen-pixel bounding rectangle of an on-screen element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    top: i32,
    bottom: i32,
    left: i32,
    right: i32,
}

impl Bounds {
    pub fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        debug_assert!(top <= bottom, "Bounds top edge must not be below bottom");
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn top(&self) -> i32 {
        self.top
    }
    pub fn bottom(&self) -> i32 {
        self.bottom
    }
    pub fn left(&self) -> i32 {
        self.left
    }
    pub fn right(&self) -> i32 {
        self.right
    }

    /// Whether this rectangle reaches into the top region of the screen.
    ///
    /// True when the top or bottom edge lies at or above `threshold_px`.
    /// A node that is entirely below the threshold (both edges past it) is
    /// out of region, and screen layout implies its descendants are too.
    pub fn intersects_top_region(&self, threshold_px: i32) -> bool {
        self.top <= threshold_px || self.bottom <= threshold_px
    }
}

/// One entry in the host's on-screen snapshot tree.
///
/// Nodes are read-only views owned by the host for the duration of a single
/// event; implementations must not be retained past `handle_event`. Field
/// accessors return `Result` because the host may invalidate a node while
/// it is being read, and an unresolvable child is reported as `None`.
pub trait UiNode {
    fn text(&self) -> Result<Option<String>, NodeAccessError>;
    fn description(&self) -> Result<Option<String>, NodeAccessError>;
    fn bounds(&self) -> Bounds;
    fn child_count(&self) -> usize;
    fn child(&self, index: usize) -> Option<&dyn UiNode>;
}
