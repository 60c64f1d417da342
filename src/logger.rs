//! Logging collaborator for the runner.
//!
//! The runner only needs two levels: informational messages and warnings.
//! `TracingLogger` forwards both to `tracing`; the host decides formatting by
//! installing a subscriber (see `init_tracing`).

use tracing_subscriber::EnvFilter;

/// Sink for the plain-text lines emitted while running system utilities.
pub trait Logger: Send + Sync {
    /// Log an informational line.
    fn message(&self, text: &str);

    /// Log a warning line.
    fn warn(&self, text: &str);
}

/// Logger backed by the `tracing` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn message(&self, text: &str) {
        tracing::info!(target: "sysutil", "{}", text);
    }

    fn warn(&self, text: &str) {
        tracing::warn!(target: "sysutil", "{}", text);
    }
}

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. An invalid directive
/// falls back to `info`. Calling this twice is harmless; the second call
/// leaves the first subscriber in place.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
