//! Shared helpers for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tc_migrate::adapters::taskcluster::Deployment;
use tc_migrate::config::Credentials;
use tc_migrate::core::migrate::RunContext;
use tc_migrate::core::runner::StepStatus;
use tc_migrate::render::Renderer;
use url::Url;

/// One observed renderer event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Status(String, StepStatus),
    Phase(String, String),
    Progress(String, String, f64),
}

/// Renderer that records every event for later assertions
#[derive(Default)]
pub struct RecordingRenderer {
    events: Mutex<Vec<Event>>,
}

impl RecordingRenderer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    /// Phases announced for one step, in order
    pub fn phases(&self, step: &str) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Phase(title, phase) if title == step => Some(phase),
                _ => None,
            })
            .collect()
    }

    /// Progress messages reported for one step, in order
    pub fn messages(&self, step: &str) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Progress(title, message, _) if title == step => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Progress percentages reported for one step, in order
    pub fn progress_values(&self, step: &str) -> Vec<f64> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Progress(title, _, progress) if title == step => Some(progress),
                _ => None,
            })
            .collect()
    }

    /// Status transitions observed for one step, in order
    pub fn statuses(&self, step: &str) -> Vec<StepStatus> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Status(title, status) if title == step => Some(status),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn step_status(&self, title: &str, status: StepStatus) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Status(title.to_string(), status));
    }

    fn announce(&self, title: &str, phase: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Phase(title.to_string(), phase.to_string()));
    }

    fn report(&self, title: &str, message: &str, progress: f64) {
        self.events.lock().unwrap().push(Event::Progress(
            title.to_string(),
            message.to_string(),
            progress,
        ));
    }
}

/// Run context wired to two mock servers
pub fn context(source_url: &str, destination_url: &str) -> Arc<RunContext> {
    let source = Deployment::new(Url::parse(source_url).unwrap(), None).unwrap();
    let destination = Deployment::new(
        Url::parse(destination_url).unwrap(),
        Some(Credentials::new("migration-client", "migration-token")),
    )
    .unwrap();
    Arc::new(RunContext {
        source,
        destination,
    })
}
