use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize JSON logging to stderr.
///
/// Quiet mode (the default for the CLI) only emits errors so stdout/stderr
/// stay usable for scripted consumers; verbose mode enables info-level
/// events. `RUST_LOG` overrides both.
pub fn init_logging(quiet: bool) {
    let level = if quiet { "error" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("vigil={level}").parse().unwrap())
                .add_directive(format!("vigil_core={level}").parse().unwrap()),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging() {
        // Test that init_logging doesn't panic
        // Note: Can only call once per test process
        // init_logging(true);
    }
}
