//! Sequential task runner
//!
//! A run is an ordered list of named steps executed strictly one at a time.
//! Each step receives the shared run context and a [`StepHandle`] through
//! which it emits phase announcements and progress to the renderer. The
//! first step failure halts the run and becomes its terminal error; errors
//! are never aggregated across steps.

use crate::domain::Result;
use crate::render::Renderer;
use futures::future::BoxFuture;
use std::sync::Arc;

/// Lifecycle of a single step
///
/// Pending → Running on dispatch, then Completed or Failed. A step after a
/// failed one never leaves Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StepStatus::Pending => "pending",
            StepStatus::Running => "running",
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Utilities handle passed to a running step
///
/// Forwards phase and progress events to the renderer, tagged with the
/// step's title.
#[derive(Clone)]
pub struct StepHandle {
    renderer: Arc<dyn Renderer>,
    title: String,
}

impl StepHandle {
    pub fn new(renderer: Arc<dyn Renderer>, title: impl Into<String>) -> Self {
        Self {
            renderer,
            title: title.into(),
        }
    }

    /// Title of the step this handle belongs to
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Announce a phase of the step, e.g. `Fetching`
    pub fn phase(&self, phase: &str) {
        self.renderer.announce(&self.title, phase);
    }

    /// Report per-item progress within the current phase
    pub fn report(&self, message: &str, progress: f64) {
        self.renderer.report(&self.title, message, progress);
    }
}

type StepFuture = BoxFuture<'static, Result<()>>;

/// One named unit of work within a run
pub struct Step<C> {
    title: String,
    run: Box<dyn FnOnce(Arc<C>, StepHandle) -> StepFuture + Send>,
}

impl<C> Step<C> {
    pub fn new<F>(title: impl Into<String>, run: F) -> Self
    where
        F: FnOnce(Arc<C>, StepHandle) -> StepFuture + Send + 'static,
    {
        Self {
            title: title.into(),
            run: Box::new(run),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Executes steps in order, sequentially, with run-level fail-fast
pub struct TaskRunner<C> {
    steps: Vec<Step<C>>,
    context: Arc<C>,
    renderer: Arc<dyn Renderer>,
}

impl<C> TaskRunner<C> {
    pub fn new(steps: Vec<Step<C>>, context: Arc<C>, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            steps,
            context,
            renderer,
        }
    }

    /// Run every step in list order
    ///
    /// # Errors
    ///
    /// Returns the first step failure unchanged; later steps are not
    /// dispatched.
    pub async fn run(self) -> Result<()> {
        let TaskRunner {
            steps,
            context,
            renderer,
        } = self;

        for step in &steps {
            renderer.step_status(step.title(), StepStatus::Pending);
        }

        for step in steps {
            let title = step.title;
            renderer.step_status(&title, StepStatus::Running);
            tracing::info!(step = %title, "step started");

            let handle = StepHandle::new(renderer.clone(), title.clone());
            match (step.run)(context.clone(), handle).await {
                Ok(()) => {
                    renderer.step_status(&title, StepStatus::Completed);
                    tracing::info!(step = %title, "step completed");
                }
                Err(e) => {
                    renderer.step_status(&title, StepStatus::Failed);
                    tracing::error!(step = %title, error = %e, "step failed");
                    return Err(e);
                }
            }
        }

        Ok(())
    }
}
