//! Observability infrastructure: structured logging to stderr.

pub mod tracing;

pub use self::tracing::{env_filter, init_tracing, level_for_verbosity};
