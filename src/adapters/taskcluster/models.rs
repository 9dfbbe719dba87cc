//! Taskcluster API models
//!
//! Request and response structures for the secrets, auth, and hooks
//! services. List responses carry an optional `continuationToken`; its
//! absence means the enumeration is complete.

use crate::domain::NamedResource;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder secrets written at the destination expire this soon
const PLACEHOLDER_EXPIRY_MINUTES: i64 = 10;

/// Response of `GET /secrets`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSecretsResponse {
    /// Secret names; contents are never part of a listing
    pub secrets: Vec<String>,
    #[serde(default)]
    pub continuation_token: Option<String>,
}

/// Body of `PUT /secret/{name}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretPayload {
    pub expires: DateTime<Utc>,
    pub secret: serde_json::Value,
}

impl SecretPayload {
    /// An empty secret body with a short expiry
    ///
    /// Secret *values* deliberately never transit this tool; the migrated
    /// entry only reserves the name and disappears unless a real value is
    /// written over it within the expiry window.
    pub fn placeholder() -> Self {
        Self {
            expires: Utc::now() + Duration::minutes(PLACEHOLDER_EXPIRY_MINUTES),
            secret: serde_json::json!({}),
        }
    }
}

/// Response of `GET /clients`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClientsResponse {
    pub clients: Vec<ClientRecord>,
    #[serde(default)]
    pub continuation_token: Option<String>,
}

/// One access-control client as listed by the auth service
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub client_id: String,
    #[serde(default)]
    pub description: String,
    pub expires: DateTime<Utc>,
    #[serde(default)]
    pub delete_on_expiration: bool,
    #[serde(default)]
    pub scopes: Vec<String>,
}

impl ClientRecord {
    /// The creation/update body for this client
    ///
    /// Create and the conflict-fallback update must send identical fields.
    pub fn payload(&self) -> ClientPayload {
        ClientPayload {
            description: self.description.clone(),
            expires: self.expires,
            delete_on_expiration: self.delete_on_expiration,
            scopes: self.scopes.clone(),
        }
    }
}

impl NamedResource for ClientRecord {
    fn name(&self) -> &str {
        &self.client_id
    }
}

/// Body of `PUT /clients/{clientId}` and `POST /clients/{clientId}`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    pub description: String,
    pub expires: DateTime<Utc>,
    pub delete_on_expiration: bool,
    pub scopes: Vec<String>,
}

/// Response of `GET /hooks` (the hook group listing)
#[derive(Debug, Clone, Deserialize)]
pub struct ListHookGroupsResponse {
    pub groups: Vec<String>,
}

/// Response of `GET /hooks/{hookGroupId}`
#[derive(Debug, Clone, Deserialize)]
pub struct ListHooksResponse {
    pub hooks: Vec<HookRecord>,
}

/// One hook definition as listed by the hooks service
///
/// Hook definitions are open-ended (task templates, schedules, bindings),
/// so everything beyond the identifying pair is kept as raw JSON and
/// replayed verbatim at the destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookRecord {
    pub hook_group_id: String,
    pub hook_id: String,
    #[serde(flatten)]
    pub definition: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_secrets_response_with_token() {
        let body = r#"{"secrets": ["a", "b"], "continuationToken": "t1"}"#;
        let response: ListSecretsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.secrets, vec!["a", "b"]);
        assert_eq!(response.continuation_token.as_deref(), Some("t1"));
    }

    #[test]
    fn test_list_secrets_response_without_token() {
        let body = r#"{"secrets": []}"#;
        let response: ListSecretsResponse = serde_json::from_str(body).unwrap();
        assert!(response.secrets.is_empty());
        assert!(response.continuation_token.is_none());
    }

    #[test]
    fn test_secret_placeholder_is_empty_and_short_lived() {
        let payload = SecretPayload::placeholder();
        assert_eq!(payload.secret, serde_json::json!({}));
        let remaining = payload.expires - Utc::now();
        assert!(remaining <= Duration::minutes(PLACEHOLDER_EXPIRY_MINUTES));
        assert!(remaining > Duration::minutes(PLACEHOLDER_EXPIRY_MINUTES - 1));
    }

    #[test]
    fn test_client_record_tolerates_extra_fields() {
        let body = r#"{
            "clientId": "worker/ci",
            "description": "CI worker",
            "expires": "2027-01-01T00:00:00Z",
            "deleteOnExpiration": true,
            "scopes": ["queue:create-task"],
            "lastDateUsed": "2026-07-01T00:00:00Z"
        }"#;
        let record: ClientRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.client_id, "worker/ci");
        assert!(record.delete_on_expiration);
        assert_eq!(record.name(), "worker/ci");
    }

    #[test]
    fn test_client_payload_serializes_camel_case() {
        let record: ClientRecord = serde_json::from_str(
            r#"{"clientId": "c", "expires": "2027-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(record.payload()).unwrap();
        assert!(json.get("deleteOnExpiration").is_some());
        assert!(json.get("scopes").is_some());
    }

    #[test]
    fn test_hook_record_keeps_definition_fields() {
        let body = r#"{
            "hookGroupId": "project-ci",
            "hookId": "nightly",
            "schedule": ["0 0 * * *"],
            "task": {"provisionerId": "builtin"}
        }"#;
        let record: HookRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.hook_group_id, "project-ci");
        assert_eq!(record.hook_id, "nightly");
        assert!(record.definition.contains_key("schedule"));

        // Replayed bodies carry the definition fields back out
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("task").is_some());
        assert_eq!(json.get("hookGroupId").unwrap(), "project-ci");
    }
}
