use tracing::{debug, warn};

use super::text::contains_normalized;
use super::types::DetectionPolicy;
use crate::tree::{NodeAccessError, UiNode};

/// Traversal depth bound.
///
/// The tree is host-owned and untrusted; the bound keeps a malformed or
/// cyclic node graph from overflowing the stack. Real accessibility trees
/// sit far below it.
pub const MAX_SCAN_DEPTH: usize = 64;

/// Fragment delimiter for region-collected text
const FRAGMENT_SEPARATOR: &str = " | ";

/// Evaluate a detection policy against one snapshot tree.
///
/// Never fails: per-node access errors are logged and treated as "no text
/// at this node".
pub fn scan(root: &dyn UiNode, policy: &DetectionPolicy, screen_height_px: u32) -> bool {
    match policy {
        DetectionPolicy::ExactPhrase { marker } => contains_marker(root, marker),
        DetectionPolicy::TopRegionMarkers { brand, status, .. } => {
            // threshold_px is Some for this variant by construction
            let threshold = policy
                .threshold_px(screen_height_px)
                .unwrap_or(screen_height_px as i32);
            let collected = collect_region_text(root, threshold);
            debug!(
                event = "core.scanner.region_collected",
                threshold_px = threshold,
                length = collected.len()
            );
            contains_normalized(&collected, brand) && contains_normalized(&collected, status)
        }
    }
}

/// Full-tree containment search: depth-first pre-order, short-circuiting on
/// the first node whose text or description contains the marker.
pub fn contains_marker(root: &dyn UiNode, marker: &str) -> bool {
    walk_contains(root, marker, 0)
}

fn walk_contains(node: &dyn UiNode, marker: &str, depth: usize) -> bool {
    if depth >= MAX_SCAN_DEPTH {
        warn!(event = "core.scanner.depth_limit_reached", depth = depth);
        return false;
    }

    if let Some(text) = field_or_none(node.text())
        && contains_normalized(&text, marker)
    {
        return true;
    }
    if let Some(description) = field_or_none(node.description())
        && contains_normalized(&description, marker)
    {
        return true;
    }

    for index in 0..node.child_count() {
        let Some(child) = node.child(index) else {
            debug!(event = "core.scanner.child_unresolved", index = index);
            continue;
        };
        if walk_contains(child, marker, depth + 1) {
            return true;
        }
    }
    false
}

/// Region-restricted text collection.
///
/// Visits a node only when its bounds reach into the top region; a node
/// entirely below the threshold is pruned together with its subtree.
/// Non-empty trimmed text and description fragments are joined in traversal
/// order.
pub fn collect_region_text(root: &dyn UiNode, threshold_px: i32) -> String {
    let mut fragments = Vec::new();
    walk_collect(root, threshold_px, 0, &mut fragments);
    fragments.join(FRAGMENT_SEPARATOR)
}

fn walk_collect(node: &dyn UiNode, threshold_px: i32, depth: usize, fragments: &mut Vec<String>) {
    if depth >= MAX_SCAN_DEPTH {
        warn!(event = "core.scanner.depth_limit_reached", depth = depth);
        return;
    }
    if !node.bounds().intersects_top_region(threshold_px) {
        return;
    }

    if let Some(text) = field_or_none(node.text()) {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            fragments.push(trimmed.to_string());
        }
    }
    if let Some(description) = field_or_none(node.description()) {
        let trimmed = description.trim();
        if !trimmed.is_empty() {
            fragments.push(trimmed.to_string());
        }
    }

    for index in 0..node.child_count() {
        let Some(child) = node.child(index) else {
            debug!(event = "core.scanner.child_unresolved", index = index);
            continue;
        };
        walk_collect(child, threshold_px, depth + 1, fragments);
    }
}

fn field_or_none(result: Result<Option<String>, NodeAccessError>) -> Option<String> {
    match result {
        Ok(value) => value,
        Err(e) => {
            debug!(event = "core.scanner.field_unavailable", error = %e);
            None
        }
    }
}
