use serde::{Deserialize, Serialize};

/// How a scan decides that the target content is on screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionPolicy {
    /// Deprecated single-phrase policy: the whole tree is searched for one
    /// exact (normalized) phrase. Kept selectable for the stricter legacy
    /// behavior; not the default.
    ExactPhrase { marker: String },

    /// Canonical policy: collect text from the top region of the screen and
    /// require both markers to appear somewhere in it, in any order.
    TopRegionMarkers {
        brand: String,
        status: String,
        region_fraction: f32,
    },
}

impl DetectionPolicy {
    /// Vertical pixel threshold for region-restricted collection.
    ///
    /// `None` for the full-tree policy, which has no region.
    pub fn threshold_px(&self, screen_height_px: u32) -> Option<i32> {
        match self {
            DetectionPolicy::ExactPhrase { .. } => None,
            DetectionPolicy::TopRegionMarkers {
                region_fraction, ..
            } => Some((screen_height_px as f32 * region_fraction).round() as i32),
        }
    }

    /// Short name used in log events and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            DetectionPolicy::ExactPhrase { .. } => "exact_phrase",
            DetectionPolicy::TopRegionMarkers { .. } => "top_region_markers",
        }
    }
}
