//! Logging initialization

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber (console only).
///
/// The filter is taken from `RUST_LOG` when set; otherwise defaults to
/// info-level output for the server and the HTTP access log.
pub fn init_logger() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "savoro_server=info,tower_http=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set global subscriber: {e}"))?;

    Ok(())
}
