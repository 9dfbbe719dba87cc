//! Secrets service operations

use super::client::{Deployment, ServiceClient};
use super::models::{ListSecretsResponse, SecretPayload};
use crate::domain::Result;

/// Client for the secrets service of one deployment
#[derive(Debug, Clone)]
pub struct SecretsService {
    client: ServiceClient,
}

impl SecretsService {
    pub fn new(deployment: &Deployment) -> Self {
        Self {
            client: deployment.service("secrets"),
        }
    }

    /// List one page of secret names
    pub async fn list(&self, continuation: Option<&str>) -> Result<ListSecretsResponse> {
        self.client.get_paged(&["secrets"], continuation).await
    }

    /// Create or replace the secret with the given name
    pub async fn set(&self, name: &str, payload: &SecretPayload) -> Result<()> {
        self.client.put(&["secret", name], payload).await
    }
}
