//! Recorded input files for the offline drivers: a single snapshot tree for
//! `scan`, or an ordered event feed for `replay`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use vigil_core::VigilError;
use vigil_core::tree::SnapshotNode;
use vigil_core::watch::EventKind;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Failed to read input file '{path}': {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to parse input file '{path}': {reason}")]
    ParseFailed { path: String, reason: String },
}

impl VigilError for FeedError {
    fn error_code(&self) -> &'static str {
        match self {
            FeedError::ReadFailed { .. } => "FEED_READ_FAILED",
            FeedError::ParseFailed { .. } => "FEED_PARSE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

/// One recorded UI-change event
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEvent {
    #[serde(default)]
    pub kind: EventKind,
    pub app_id: String,
    /// Absent tree models the host returning no root for the event
    #[serde(default)]
    pub tree: Option<SnapshotNode>,
}

/// Load an event feed: a JSON array of feed events
pub fn load_feed(path: &Path) -> Result<Vec<FeedEvent>, FeedError> {
    let content = read_input(path)?;
    serde_json::from_str(&content).map_err(|e| FeedError::ParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Load a single snapshot tree file
pub fn load_tree(path: &Path) -> Result<SnapshotNode, FeedError> {
    let content = read_input(path)?;
    serde_json::from_str(&content).map_err(|e| FeedError::ParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn read_input(path: &Path) -> Result<String, FeedError> {
    fs::read_to_string(path).map_err(|e| FeedError::ReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_tree() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"text": "Meduza — LIVE"}}"#).unwrap();

        let tree = load_tree(file.path()).unwrap();
        use vigil_core::tree::UiNode;
        assert_eq!(tree.text().unwrap(), Some("Meduza — LIVE".to_string()));
    }

    #[test]
    fn test_load_feed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"kind": "window_content_changed", "app_id": "org.telegram.messenger",
                  "tree": {{"text": "Meduza — LIVE"}}}},
                {{"app_id": "com.whatsapp"}}
            ]"#
        )
        .unwrap();

        let feed = load_feed(file.path()).unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].kind, EventKind::WindowContentChanged);
        assert_eq!(feed[0].app_id, "org.telegram.messenger");
        assert!(feed[0].tree.is_some());
        // kind and tree both default
        assert_eq!(feed[1].kind, EventKind::Other);
        assert!(feed[1].tree.is_none());
    }

    #[test]
    fn test_load_feed_missing_file() {
        let err = load_feed(Path::new("/nonexistent/feed.json")).unwrap_err();
        assert_eq!(err.error_code(), "FEED_READ_FAILED");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_load_feed_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_feed(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "FEED_PARSE_FAILED");
    }

    #[test]
    fn test_load_tree_rejects_feed_shaped_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"app_id": "x"}}]"#).unwrap();

        assert!(load_tree(file.path()).is_err());
    }
}
