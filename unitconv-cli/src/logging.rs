//! Diagnostics setup
//!
//! Logs go to stderr so stdout only carries prompts and results.

use std::env;
use std::io;
use tracing_subscriber::{fmt, prelude::*, util::TryInitError, EnvFilter};

/// Level used when RUST_LOG is not set
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter from RUST_LOG, falling back to `DEFAULT_LEVEL`
pub fn env_filter() -> EnvFilter {
    env::var("RUST_LOG")
        .map_or_else(
            |_| EnvFilter::new(DEFAULT_LEVEL),
            |directive| EnvFilter::new(&directive),
        )
}

/// Install the global subscriber
pub fn init() -> Result<(), TryInitError> {
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(layer)
        .try_init()
}
