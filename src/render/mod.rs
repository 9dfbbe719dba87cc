//! Progress rendering
//!
//! The runner and copy engine emit three kinds of events: step status
//! transitions, phase announcements, and per-item progress. Two renderers
//! consume them — an interactive multi-bar display for terminals and a flat
//! sequential log for everything else. Both carry exactly the same data;
//! the choice is an output-formatting concern made once at startup.

pub mod console;
pub mod log;

use crate::core::runner::StepStatus;
use std::io::IsTerminal;
use std::sync::Arc;

pub use console::ConsoleRenderer;
pub use log::LogRenderer;

/// Sink for run progress events
pub trait Renderer: Send + Sync {
    /// A step changed status
    fn step_status(&self, title: &str, status: StepStatus);

    /// A step entered a phase, e.g. `Fetching`
    fn announce(&self, title: &str, phase: &str);

    /// Per-item progress within a phase, as a 0..100 percentage
    fn report(&self, title: &str, message: &str, progress: f64);
}

/// Pick the renderer for this process
///
/// Interactive display when stdout is attached to a terminal, otherwise a
/// flat log of the same events. The choice is made once; the renderer lives
/// for the whole run.
pub fn for_stdout() -> Arc<dyn Renderer> {
    if std::io::stdout().is_terminal() {
        Arc::new(ConsoleRenderer::new())
    } else {
        Arc::new(LogRenderer)
    }
}
