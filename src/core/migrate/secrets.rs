//! Secrets migration
//!
//! Copies secret *names* only. Each destination entry is written with an
//! empty placeholder body and a 10-minute expiry: secret values must never
//! transit an automated migration tool, so the copied entries merely reserve
//! their names until real values are written by an operator.

use super::RunContext;
use crate::adapters::taskcluster::models::SecretPayload;
use crate::adapters::taskcluster::SecretsService;
use crate::core::copy::{copy, Page, Paginator};
use crate::core::runner::StepHandle;
use crate::domain::{NamedResource, Result};
use futures::FutureExt;
use std::sync::Arc;

/// A secret known only by name
#[derive(Debug, Clone)]
pub struct SecretRef {
    pub name: String,
}

impl NamedResource for SecretRef {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Run the secrets step
pub async fn run(ctx: Arc<RunContext>, handle: StepHandle) -> Result<()> {
    let source = SecretsService::new(&ctx.source);
    let destination = SecretsService::new(&ctx.destination);

    let lister = Paginator::new(move |continuation| {
        let source = source.clone();
        async move {
            let response = source.list(continuation.as_deref()).await?;
            Ok(Page {
                items: response
                    .secrets
                    .into_iter()
                    .map(|name| SecretRef { name })
                    .collect(),
                continuation_token: response.continuation_token,
            })
        }
        .boxed()
    });

    copy(
        lister,
        move |secret: SecretRef| {
            let destination = destination.clone();
            async move {
                destination
                    .set(&secret.name, &SecretPayload::placeholder())
                    .await
            }
        },
        &handle,
    )
    .await
}
