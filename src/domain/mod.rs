//! Domain types for tc-migrate
//!
//! The domain layer provides:
//! - **Error types** ([`MigrateError`], [`ApiError`])
//! - **Result type alias** ([`Result`])
//! - **Resource naming** ([`NamedResource`])
//!
//! All fallible operations in the crate return [`Result<T>`] and propagate
//! errors with the `?` operator; nothing below the binary edge prints or
//! swallows them.

pub mod errors;
pub mod resource;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ApiError, MigrateError};
pub use resource::NamedResource;
pub use result::Result;
