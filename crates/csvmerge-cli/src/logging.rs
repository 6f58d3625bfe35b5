// Rust guideline compliant 2026-10-19

//! Logging setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Maps a `-v` count to a default filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr `tracing` subscriber.
///
/// An explicit `-v` wins over `RUST_LOG`; without it `RUST_LOG` is honoured and
/// falls back to `warn`. Calling this twice is harmless.
pub fn init(verbosity: u8) {
    let filter = if verbosity > 0 {
        EnvFilter::new(level_for(verbosity))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(0)))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
