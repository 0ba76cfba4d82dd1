//! Logging setup.
//!
//! Declarations go to stdout, so every log line is written to stderr.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Level implied by the number of `-v` flags.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// `RUST_LOG` wins when set; otherwise the verbosity level applies.
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity).as_str().to_lowercase()))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing(verbosity: u8) {
    let _ = fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
