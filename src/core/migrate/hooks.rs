//! Hooks migration
//!
//! Hooks live two levels deep: groups, then hooks within each group. The
//! lister flattens both levels into one group-major sequence, naming each
//! entry `{group}/{hookId}`. Creation is unconditional; there is no
//! conflict handling for hooks.

use super::RunContext;
use crate::adapters::taskcluster::models::HookRecord;
use crate::adapters::taskcluster::HooksService;
use crate::core::copy::{copy, ResourceLister};
use crate::core::runner::StepHandle;
use crate::domain::{NamedResource, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;

/// A hook paired with its `{group}/{hookId}` display name
#[derive(Debug, Clone)]
pub struct HookItem {
    name: String,
    pub hook: HookRecord,
}

impl HookItem {
    fn new(hook: HookRecord) -> Self {
        Self {
            name: format!("{}/{}", hook.hook_group_id, hook.hook_id),
            hook,
        }
    }
}

impl NamedResource for HookItem {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Two-level lister over hook groups and their hooks
///
/// The group listing is fetched once, on the first `try_next` call; hooks
/// are then fetched one group at a time as the sequence is consumed.
pub struct HookLister {
    service: HooksService,
    groups: Option<VecDeque<String>>,
    buffer: VecDeque<HookItem>,
}

impl HookLister {
    pub fn new(service: HooksService) -> Self {
        Self {
            service,
            groups: None,
            buffer: VecDeque::new(),
        }
    }
}

#[async_trait]
impl ResourceLister for HookLister {
    type Item = HookItem;

    async fn try_next(&mut self) -> Result<Option<HookItem>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }

            if self.groups.is_none() {
                let response = self.service.list_hook_groups().await?;
                self.groups = Some(response.groups.into());
            }

            let Some(group) = self.groups.as_mut().and_then(|groups| groups.pop_front()) else {
                return Ok(None);
            };

            let response = self.service.list_hooks(&group).await?;
            self.buffer
                .extend(response.hooks.into_iter().map(HookItem::new));
        }
    }
}

/// Run the hooks step
pub async fn run(ctx: Arc<RunContext>, handle: StepHandle) -> Result<()> {
    let source = HooksService::new(&ctx.source);
    let destination = HooksService::new(&ctx.destination);

    copy(
        HookLister::new(source),
        move |item: HookItem| {
            let destination = destination.clone();
            async move {
                destination
                    .create_hook(&item.hook.hook_group_id, &item.hook.hook_id, &item.hook)
                    .await
            }
        },
        &handle,
    )
    .await
}
