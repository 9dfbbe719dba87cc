//! Result type alias for tc-migrate operations

use crate::domain::MigrateError;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, MigrateError>;
