use serde::{Deserialize, Serialize};

use super::errors::NodeAccessError;
use super::types::{Bounds, UiNode};

/// Owned element tree used by tests and the offline replay driver.
///
/// Deserializes from JSON fixture files; all fields default so a fixture
/// only needs to spell out what it cares about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    bounds: Bounds,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SnapshotNode>,
}

impl SnapshotNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_child(mut self, child: SnapshotNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[SnapshotNode] {
        &self.children
    }
}

impl UiNode for SnapshotNode {
    fn text(&self) -> Result<Option<String>, NodeAccessError> {
        Ok(self.text.clone())
    }

    fn description(&self) -> Result<Option<String>, NodeAccessError> {
        Ok(self.description.clone())
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<&dyn UiNode> {
        self.children.get(index).map(|c| c as &dyn UiNode)
    }
}
