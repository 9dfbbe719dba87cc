//! Secure credential handling using the secrecy crate
//!
//! The destination access token is held in a [`Secret`] so it is zeroed on
//! drop and redacted from any `Debug` output. Access requires an explicit
//! `expose_secret()` call at the single place that builds the auth header.

use secrecy::{CloneableSecret, DebugSecret, Secret};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}

/// Access token held in memory, zeroed on drop
pub type SecretString = Secret<SecretValue>;

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_value_roundtrip() {
        let secret: SecretString = Secret::new(SecretValue::from("token-123".to_string()));
        assert_eq!(secret.expose_secret().as_ref(), "token-123");
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret: SecretString = Secret::new(SecretValue::from("token-123".to_string()));
        let debug = format!("{secret:?}");
        assert!(!debug.contains("token-123"));
    }

    #[test]
    fn test_secret_value_is_empty() {
        assert!(SecretValue::from(String::new()).is_empty());
        assert!(!SecretValue::from("x".to_string()).is_empty());
    }
}
