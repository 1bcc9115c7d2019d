//! Tracing/logging initialization.
//!
//! Logs go to stderr so stdout stays a clean CSV report. The filter comes from
//! `RUST_LOG` and defaults to `warn`, which shows skipped records.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::warn!("logging initialised twice without panicking");
    }
}
