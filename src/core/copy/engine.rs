//! The copy engine
//!
//! One copy operation runs in two phases: drain the lister into an ordered
//! in-memory batch, then replay a create action per item against the
//! destination, reporting progress before each write. Items are processed
//! strictly one at a time and the first failure ends the operation.

use super::lister::ResourceLister;
use crate::core::runner::StepHandle;
use crate::domain::{NamedResource, Result};
use std::future::Future;

/// Phase announced while the lister is drained
pub const PHASE_FETCHING: &str = "Fetching";
/// Phase announced while create actions replay
pub const PHASE_COPYING: &str = "Copying";

/// Copy every resource the lister yields to the destination
///
/// Progress for item `i` of `N` is reported as `i * 100 / N` percent,
/// before the item's create action is awaited. An empty batch reports no
/// progress at all.
///
/// # Errors
///
/// The first error from the lister or from a create action propagates
/// immediately; remaining items are not processed.
pub async fn copy<L, F, Fut>(mut lister: L, mut create: F, progress: &StepHandle) -> Result<()>
where
    L: ResourceLister,
    L::Item: NamedResource,
    F: FnMut(L::Item) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    progress.phase(PHASE_FETCHING);
    let mut batch = Vec::new();
    while let Some(item) = lister.try_next().await? {
        batch.push(item);
    }
    tracing::debug!(step = progress.title(), count = batch.len(), "batch fetched");

    progress.phase(PHASE_COPYING);
    let total = batch.len();
    for (index, item) in batch.into_iter().enumerate() {
        progress.report(item.name(), index as f64 * 100.0 / total as f64);
        create(item).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::copy::lister::{Page, Paginator};
    use crate::core::runner::{StepHandle, StepStatus};
    use crate::domain::{ApiError, MigrateError};
    use crate::render::Renderer;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Phase(String),
        Report(String, f64),
        Create(String),
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<Event>>,
    }

    impl Renderer for Recorder {
        fn step_status(&self, _title: &str, _status: StepStatus) {}

        fn announce(&self, _title: &str, phase: &str) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Phase(phase.to_string()));
        }

        fn report(&self, _title: &str, message: &str, progress: f64) {
            self.events
                .lock()
                .unwrap()
                .push(Event::Report(message.to_string(), progress));
        }
    }

    #[derive(Debug, Clone)]
    struct Item(String);

    impl NamedResource for Item {
        fn name(&self) -> &str {
            &self.0
        }
    }

    fn lister_of(names: &[&str]) -> Paginator<Item> {
        let items: Vec<Item> = names.iter().map(|n| Item(n.to_string())).collect();
        let mut pages = std::collections::VecDeque::from([Page {
            items,
            continuation_token: None,
        }]);
        Paginator::new(move |_| {
            let page = pages.pop_front().expect("single page");
            Box::pin(async move { Ok(page) })
        })
    }

    fn harness() -> (Arc<Recorder>, StepHandle) {
        let recorder = Arc::new(Recorder::default());
        let handle = StepHandle::new(recorder.clone(), "Copy Things");
        (recorder, handle)
    }

    #[tokio::test]
    async fn test_progress_reported_before_each_create() {
        let (recorder, handle) = harness();
        let events = recorder.events.lock().unwrap().len();
        assert_eq!(events, 0);

        copy(
            lister_of(&["a", "b", "c"]),
            |item: Item| {
                let events = &recorder.events;
                let name = item.0.clone();
                async move {
                    events.lock().unwrap().push(Event::Create(name));
                    Ok(())
                }
            },
            &handle,
        )
        .await
        .unwrap();

        let events = recorder.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                Event::Phase("Fetching".to_string()),
                Event::Phase("Copying".to_string()),
                Event::Report("a".to_string(), 0.0),
                Event::Create("a".to_string()),
                Event::Report("b".to_string(), 100.0 / 3.0),
                Event::Create("b".to_string()),
                Event::Report("c".to_string(), 200.0 / 3.0),
                Event::Create("c".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_batch_reports_nothing() {
        let (recorder, handle) = harness();

        copy(
            lister_of(&[]),
            |_: Item| async move { panic!("create must not run for an empty batch") },
            &handle,
        )
        .await
        .unwrap();

        let events = recorder.events.lock().unwrap().clone();
        // Both phases are announced, but no per-item progress is emitted
        assert_eq!(
            events,
            vec![
                Event::Phase("Fetching".to_string()),
                Event::Phase("Copying".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_failure_stops_the_batch() {
        let (recorder, handle) = harness();

        let result = copy(
            lister_of(&["a", "b", "c"]),
            |item: Item| {
                let events = &recorder.events;
                let name = item.0.clone();
                async move {
                    if name == "b" {
                        return Err(MigrateError::Api(ApiError::ServerError {
                            status: 500,
                            message: "boom".to_string(),
                        }));
                    }
                    events.lock().unwrap().push(Event::Create(name));
                    Ok(())
                }
            },
            &handle,
        )
        .await;

        assert!(result.is_err());
        let events = recorder.events.lock().unwrap().clone();
        // "c" was neither reported nor created
        assert_eq!(
            events,
            vec![
                Event::Phase("Fetching".to_string()),
                Event::Phase("Copying".to_string()),
                Event::Report("a".to_string(), 0.0),
                Event::Create("a".to_string()),
                Event::Report("b".to_string(), 100.0 / 3.0),
            ]
        );
    }
}
