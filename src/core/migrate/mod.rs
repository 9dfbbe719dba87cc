//! Resource migrations
//!
//! One module per resource kind, each pairing a lister with a create action
//! and wiring them into the copy engine. [`steps`] builds the ordered run:
//! secrets, then clients, then hooks.

pub mod clients;
pub mod hooks;
pub mod secrets;

use crate::adapters::taskcluster::Deployment;
use crate::config::Settings;
use crate::core::runner::Step;
use crate::domain::Result;

/// Shared context handed to every step
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Source deployment, accessed anonymously
    pub source: Deployment,
    /// Destination deployment, accessed with credentials
    pub destination: Deployment,
}

impl RunContext {
    /// Build the two deployment handles from resolved settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            source: Deployment::new(settings.source_root_url.clone(), None)?,
            destination: Deployment::new(
                settings.destination_root_url.clone(),
                Some(settings.destination_credentials.clone()),
            )?,
        })
    }
}

/// The ordered list of migration steps
pub fn steps() -> Vec<Step<RunContext>> {
    vec![
        Step::new("Copy Secrets", |ctx, handle| {
            Box::pin(secrets::run(ctx, handle))
        }),
        Step::new("Copy Clients", |ctx, handle| {
            Box::pin(clients::run(ctx, handle))
        }),
        Step::new("Copy Hooks", |ctx, handle| Box::pin(hooks::run(ctx, handle))),
    ]
}
