//! Configuration from the environment
//!
//! tc-migrate takes no command-line arguments; its behavior is parameterized
//! entirely by four environment variables:
//!
//! - `SRC_ROOT_URL` — root URL of the source deployment (anonymous access)
//! - `TASKCLUSTER_ROOT_URL` — root URL of the destination deployment
//! - `TASKCLUSTER_CLIENT_ID` — destination client id
//! - `TASKCLUSTER_ACCESS_TOKEN` — destination access token
//!
//! A missing variable is a fatal startup error naming the variable, before
//! any step runs.

pub mod secret;

use crate::domain::{MigrateError, Result};
use url::Url;

pub use secret::{SecretString, SecretValue};

/// Environment variable naming the source deployment
pub const ENV_SRC_ROOT_URL: &str = "SRC_ROOT_URL";
/// Environment variable naming the destination deployment
pub const ENV_DST_ROOT_URL: &str = "TASKCLUSTER_ROOT_URL";
/// Environment variable carrying the destination client id
pub const ENV_DST_CLIENT_ID: &str = "TASKCLUSTER_CLIENT_ID";
/// Environment variable carrying the destination access token
pub const ENV_DST_ACCESS_TOKEN: &str = "TASKCLUSTER_ACCESS_TOKEN";

/// Credentials for the destination deployment
///
/// The source side requires no credentials; listing is anonymous read-only.
#[derive(Clone)]
pub struct Credentials {
    /// Client id, sent as the auth username
    pub client_id: String,
    /// Access token, redacted from logs and zeroed on drop
    pub access_token: SecretString,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            access_token: SecretString::new(SecretValue::from(access_token.into())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Runtime settings resolved from the environment
#[derive(Debug, Clone)]
pub struct Settings {
    /// Source deployment root URL
    pub source_root_url: Url,
    /// Destination deployment root URL
    pub destination_root_url: Url,
    /// Destination credentials
    pub destination_credentials: Credentials,
}

impl Settings {
    /// Resolve settings from the process environment
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error naming the first missing variable,
    /// or describing an unparseable root URL.
    pub fn from_env() -> Result<Self> {
        let source_root_url = parse_root_url(ENV_SRC_ROOT_URL, &require_env(ENV_SRC_ROOT_URL)?)?;
        let destination_root_url =
            parse_root_url(ENV_DST_ROOT_URL, &require_env(ENV_DST_ROOT_URL)?)?;
        let destination_credentials = Credentials::new(
            require_env(ENV_DST_CLIENT_ID)?,
            require_env(ENV_DST_ACCESS_TOKEN)?,
        );

        Ok(Self {
            source_root_url,
            destination_root_url,
            destination_credentials,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MigrateError::Configuration(format!("{name} not set"))),
    }
}

fn parse_root_url(name: &str, raw: &str) -> Result<Url> {
    // Root URLs are joined with service paths later; a trailing slash would
    // produce double slashes in request URLs.
    let url = Url::parse(raw.trim_end_matches('/'))
        .map_err(|e| MigrateError::Configuration(format!("{name} is not a valid URL: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(MigrateError::Configuration(format!(
            "{name} is not a valid service root URL: {raw}"
        )));
    }
    Ok(url)
}
