use crate::errors::VigilError;

/// Failure to read a field from a host-owned node.
///
/// The host may recycle or invalidate nodes while a snapshot is being read;
/// a failed lookup is reported as a value so the scanner can skip the field
/// and keep walking.
#[derive(Debug, thiserror::Error)]
pub enum NodeAccessError {
    #[error("Node text unavailable: {reason}")]
    TextUnavailable { reason: String },

    #[error("Node description unavailable: {reason}")]
    DescriptionUnavailable { reason: String },
}

impl VigilError for NodeAccessError {
    fn error_code(&self) -> &'static str {
        match self {
            NodeAccessError::TextUnavailable { .. } => "TREE_TEXT_UNAVAILABLE",
            NodeAccessError::DescriptionUnavailable { .. } => "TREE_DESCRIPTION_UNAVAILABLE",
        }
    }
}
