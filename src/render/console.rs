//! Interactive terminal renderer
//!
//! One progress bar per step, stacked in run order. Bars are created when
//! the runner announces the pending steps, fill up during the Copying
//! phase, and are finished (or abandoned) on completion.

use super::Renderer;
use crate::core::runner::StepStatus;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;

const BAR_TEMPLATE: &str = "{prefix:<14} [{bar:40}] {pos:>3}% {msg}";
const DRAW_RATE_HZ: u8 = 12;

pub struct ConsoleRenderer {
    multi: MultiProgress,
    bars: Mutex<HashMap<String, ProgressBar>>,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::stdout_with_hz(
                DRAW_RATE_HZ,
            )),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
    }

    fn bar_for(&self, title: &str) -> ProgressBar {
        let mut bars = self.bars.lock().unwrap();
        bars.entry(title.to_string())
            .or_insert_with(|| {
                let bar = self.multi.add(ProgressBar::new(100));
                bar.set_style(Self::bar_style());
                bar.set_prefix(title.to_string());
                bar
            })
            .clone()
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for ConsoleRenderer {
    fn step_status(&self, title: &str, status: StepStatus) {
        let bar = self.bar_for(title);
        match status {
            StepStatus::Pending => bar.set_message("pending"),
            StepStatus::Running => bar.set_message("starting"),
            StepStatus::Completed => {
                bar.set_position(100);
                bar.finish_with_message("done");
            }
            StepStatus::Failed => bar.abandon_with_message("failed"),
        }
    }

    fn announce(&self, title: &str, phase: &str) {
        self.bar_for(title).set_message(phase.to_string());
    }

    fn report(&self, title: &str, message: &str, progress: f64) {
        let bar = self.bar_for(title);
        bar.set_position(progress.round() as u64);
        bar.set_message(message.to_string());
    }
}
