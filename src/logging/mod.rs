//! Structured logging setup using tracing
//!
//! Console-only logging for a single-shot tool. Events go to stderr so the
//! interactive progress display keeps stdout to itself. The filter can be
//! overridden with the `TC_MIGRATE_LOG` environment variable.

use crate::domain::{MigrateError, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the default log filter
pub const ENV_LOG_FILTER: &str = "TC_MIGRATE_LOG";

/// Initialize the logging system
///
/// # Arguments
///
/// * `default_directive` - Filter used when `TC_MIGRATE_LOG` is not set,
///   e.g. `"tc_migrate=info"`
///
/// # Errors
///
/// Returns a `Configuration` error if a global subscriber is already
/// installed.
pub fn init_logging(default_directive: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| MigrateError::Configuration(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}
