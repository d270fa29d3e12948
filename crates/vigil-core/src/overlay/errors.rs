use crate::errors::VigilError;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("Failed to attach overlay view: {reason}")]
    AttachFailed { reason: String },

    #[error("Failed to detach overlay view {handle_id}: {reason}")]
    DetachFailed { handle_id: u64, reason: String },

    #[error("Host action '{action}' failed: {reason}")]
    ActionFailed { action: String, reason: String },
}

impl VigilError for SurfaceError {
    fn error_code(&self) -> &'static str {
        match self {
            SurfaceError::AttachFailed { .. } => "OVERLAY_ATTACH_FAILED",
            SurfaceError::DetachFailed { .. } => "OVERLAY_DETACH_FAILED",
            SurfaceError::ActionFailed { .. } => "OVERLAY_ACTION_FAILED",
        }
    }
}
