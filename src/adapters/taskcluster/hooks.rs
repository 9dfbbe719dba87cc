//! Hooks service operations

use super::client::{Deployment, ServiceClient};
use super::models::{HookRecord, ListHookGroupsResponse, ListHooksResponse};
use crate::domain::Result;

/// Client for the hooks service of one deployment
#[derive(Debug, Clone)]
pub struct HooksService {
    client: ServiceClient,
}

impl HooksService {
    pub fn new(deployment: &Deployment) -> Self {
        Self {
            client: deployment.service("hooks"),
        }
    }

    /// List all hook group ids
    ///
    /// The group listing is not paginated; groups are few.
    pub async fn list_hook_groups(&self) -> Result<ListHookGroupsResponse> {
        self.client.get(&["hooks"]).await
    }

    /// List the hooks within one group
    pub async fn list_hooks(&self, hook_group_id: &str) -> Result<ListHooksResponse> {
        self.client.get(&["hooks", hook_group_id]).await
    }

    /// Create the hook at the destination under the same group and id
    pub async fn create_hook(
        &self,
        hook_group_id: &str,
        hook_id: &str,
        hook: &HookRecord,
    ) -> Result<()> {
        self.client.put(&["hooks", hook_group_id, hook_id], hook).await
    }
}
