//! Clients migration
//!
//! Clients under the `static/` namespace are deployment-managed identities
//! and are filtered out during listing. Creation races against anything
//! already present at the destination: a 409 conflict falls back to an
//! update call carrying the exact same fields.

use super::RunContext;
use crate::adapters::taskcluster::models::ClientRecord;
use crate::adapters::taskcluster::AuthService;
use crate::core::copy::{copy, Page, Paginator};
use crate::core::runner::StepHandle;
use crate::domain::{ApiError, MigrateError, Result};
use futures::FutureExt;
use std::sync::Arc;

/// Clients whose id starts with this prefix are never copied
pub const RESERVED_PREFIX: &str = "static/";

/// Run the clients step
pub async fn run(ctx: Arc<RunContext>, handle: StepHandle) -> Result<()> {
    let source = AuthService::new(&ctx.source);
    let destination = AuthService::new(&ctx.destination);

    let lister = Paginator::new(move |continuation| {
        let source = source.clone();
        async move {
            let response = source.list_clients(continuation.as_deref()).await?;
            Ok(Page {
                items: response
                    .clients
                    .into_iter()
                    .filter(|client| !client.client_id.starts_with(RESERVED_PREFIX))
                    .collect(),
                continuation_token: response.continuation_token,
            })
        }
        .boxed()
    });

    copy(
        lister,
        move |client: ClientRecord| {
            let destination = destination.clone();
            async move {
                let payload = client.payload();
                match destination.create_client(&client.client_id, &payload).await {
                    Err(MigrateError::Api(ApiError::Conflict(_))) => {
                        tracing::debug!(client_id = %client.client_id, "exists, updating");
                        destination.update_client(&client.client_id, &payload).await
                    }
                    other => other,
                }
            }
        },
        &handle,
    )
    .await
}
