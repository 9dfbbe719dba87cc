//! Auth service operations (access-control clients)

use super::client::{Deployment, ServiceClient};
use super::models::{ClientPayload, ListClientsResponse};
use crate::domain::Result;

/// Client for the auth service of one deployment
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ServiceClient,
}

impl AuthService {
    pub fn new(deployment: &Deployment) -> Self {
        Self {
            client: deployment.service("auth"),
        }
    }

    /// List one page of access-control clients
    pub async fn list_clients(&self, continuation: Option<&str>) -> Result<ListClientsResponse> {
        self.client.get_paged(&["clients"], continuation).await
    }

    /// Create a client; a 409 surfaces as `ApiError::Conflict`
    pub async fn create_client(&self, client_id: &str, payload: &ClientPayload) -> Result<()> {
        self.client.put(&["clients", client_id], payload).await
    }

    /// Update an existing client with the same fields as creation
    pub async fn update_client(&self, client_id: &str, payload: &ClientPayload) -> Result<()> {
        self.client.post(&["clients", client_id], payload).await
    }
}
