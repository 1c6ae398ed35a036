//! Logging setup
//!
//! Structured logging goes through `tracing`. `RUST_LOG` takes precedence
//! over the level passed on the command line, e.g.
//! `RUST_LOG=spacex_dash::web=debug`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter used when `RUST_LOG` is not set
///
/// Our own crate logs at `level`; polars and the windowing stack stay at warn.
pub fn default_filter(level: &str) -> String {
    format!(
        "warn,{}={}",
        env!("CARGO_PKG_NAME").replace('-', "_"),
        level
    )
}

/// Initialize logging with a specific level
///
/// # Arguments
/// * `level` - Log level: "trace", "debug", "info", "warn", or "error"
pub fn init_logging(level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level).into());

    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(filter)
        .try_init();

    match result {
        Ok(()) => tracing::debug!("logging initialized at level: {}", level),
        // A subscriber is already installed (tests, embedding); keep it
        Err(e) => eprintln!("logging already initialized: {}", e),
    }
}
