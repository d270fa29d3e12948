//! Event gate: originating-application check that short-circuits scanning.
//!
//! Events from apps other than the watched one are treated as automatic
//! non-matches without walking their trees, both to skip wasted traversals
//! and to avoid false positives from unrelated apps that happen to show the
//! marker text.

/// Case-insensitive substring gate over application identifiers
#[derive(Debug, Clone)]
pub struct EventGate {
    fragments: Vec<String>,
}

impl EventGate {
    /// Build a gate from identifier fragments, e.g. `["telegram"]`.
    ///
    /// An empty fragment list passes nothing.
    pub fn new(fragments: Vec<String>) -> Self {
        let fragments = fragments
            .into_iter()
            .map(|f| f.to_lowercase())
            .filter(|f| !f.is_empty())
            .collect();
        Self { fragments }
    }

    pub fn passes(&self, app_id: &str) -> bool {
        let app_id = app_id.to_lowercase();
        self.fragments.iter().any(|f| app_id.contains(f))
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }
}
