//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main tc-migrate error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Configuration-related errors (missing or invalid environment values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Remote API errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Errors from Taskcluster REST calls
///
/// Non-2xx responses are mapped by status class. A 409 gets its own variant
/// because the clients step treats it as a control signal, not a failure.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the service at all
    #[error("Failed to connect to service: {0}")]
    ConnectionFailed(String),

    /// Response body could not be decoded
    #[error("Invalid response from service: {0}")]
    InvalidResponse(String),

    /// Resource already exists (409)
    #[error("Resource already exists: {0}")]
    Conflict(String),

    /// Client error (4xx other than 409)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },
}

impl ApiError {
    /// Map a non-success HTTP status and response body to an error
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            409 => ApiError::Conflict(message),
            400..=499 => ApiError::ClientError { status, message },
            _ => ApiError::ServerError { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_migrate_error_display() {
        let err = MigrateError::Configuration("SRC_ROOT_URL not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: SRC_ROOT_URL not set");
    }

    #[test]
    fn test_api_error_conversion() {
        let api_err = ApiError::ConnectionFailed("connection refused".to_string());
        let err: MigrateError = api_err.into();
        assert!(matches!(err, MigrateError::Api(_)));
    }

    #[test_case(409 => matches ApiError::Conflict(_) ; "conflict gets its own variant")]
    #[test_case(404 => matches ApiError::ClientError { status: 404, .. } ; "4xx maps to client error")]
    #[test_case(400 => matches ApiError::ClientError { status: 400, .. } ; "range starts at 400")]
    #[test_case(500 => matches ApiError::ServerError { status: 500, .. } ; "5xx maps to server error")]
    #[test_case(503 => matches ApiError::ServerError { status: 503, .. } ; "unavailable is a server error")]
    fn test_from_status(status: u16) -> ApiError {
        ApiError::from_status(status, "message".to_string())
    }

    #[test]
    fn test_migrate_error_implements_std_error() {
        let err = MigrateError::Configuration("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
