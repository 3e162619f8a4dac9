// Tracing setup
//
// Logs go to stderr so they never interleave with command output on stdout.
// RUST_LOG wins over the built-in default level.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::filter::EnvFilter;

/// Level used when RUST_LOG is unset.
pub fn default_level(debug: bool) -> &'static str {
    if debug {
        "localctx=debug"
    } else {
        "warn"
    }
}

/// Install the global fmt subscriber. Errors if called twice.
pub fn init(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(debug)))
        .context("failed to configure tracing level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("logging already initialized: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_raises_crate_level() {
        assert_eq!(default_level(true), "localctx=debug");
        assert_eq!(default_level(false), "warn");
        assert!(EnvFilter::try_new(default_level(true)).is_ok());
    }
}
