use tracing_subscriber::{fmt, EnvFilter};

/// JSON logs filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        tracing::warn!(error = %e, "tracing init failed");
    }
}
