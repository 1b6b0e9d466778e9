//! Telemetry for easel
//!
//! Structured logging via the `tracing` ecosystem

/// Initialize the tracing subscriber
///
/// The filter honors `RUST_LOG` when set and falls back to
/// `default_filter` otherwise. Events are written to stdout with their
/// target module; thread ids and source locations are omitted.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize telemetry: {e}"))?;

    Ok(())
}
