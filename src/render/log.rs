//! Flat sequential log renderer
//!
//! Emits the same event stream as the interactive display, one tracing
//! line per event, for non-terminal output (CI logs, pipes).

use super::Renderer;
use crate::core::runner::StepStatus;

pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn step_status(&self, title: &str, status: StepStatus) {
        tracing::info!(step = title, status = %status, "step");
    }

    fn announce(&self, title: &str, phase: &str) {
        tracing::info!(step = title, phase = phase, "phase");
    }

    fn report(&self, title: &str, message: &str, progress: f64) {
        tracing::info!(step = title, message = message, progress = progress, "progress");
    }
}
