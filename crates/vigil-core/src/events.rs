//! Observational lifecycle events.
//!
//! Human-readable status logging for the watch loop (service started, event
//! counts, marker hits). Purely a debug channel: nothing in the core depends
//! on these for correctness.

use tracing::{debug, error, info};

use crate::errors::VigilError;

pub fn log_service_started() {
    info!(
        event = "vigil.service.started",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_event_processed(count: u64, kind: &str, app_id: &str) {
    debug!(
        event = "vigil.service.event_processed",
        count = count,
        kind = kind,
        app_id = app_id
    );
}

pub fn log_marker_found(app_id: &str) {
    info!(event = "vigil.service.marker_found", app_id = app_id);
}

pub fn log_service_stopped(event_count: u64) {
    info!(event = "vigil.service.stopped", event_count = event_count);
}

pub fn log_service_error(error: &dyn VigilError) {
    if error.is_user_error() {
        info!(
            event = "vigil.service.user_error",
            code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "vigil.service.error",
            code = error.error_code(),
            error = %error
        );
    }
}
