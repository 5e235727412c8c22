//! Terminal front-end: progress bar and coloured result lines.
//!
//! [`TaskProgress`] follows a run through the [`ProgressObserver`] hook and
//! draws an `indicatif` bar; `console` styles the outcome lines.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::ScoutError;
use crate::pipeline::{ProgressObserver, ProgressState, RunRecord, RunStatus};

/// Visual progress of one task run in the terminal.
pub struct TaskProgress {
    pb: ProgressBar,
    green: Style,
    red: Style,
    yellow: Style,
}

impl TaskProgress {
    /// Starts the bar for a task. A hidden bar still accepts updates, which
    /// keeps machine-readable output clean.
    pub fn start(title: &str, subject: &str, visible: bool) -> Self {
        let pb = if visible {
            ProgressBar::new(100)
        } else {
            ProgressBar::hidden()
        };
        let style = ProgressStyle::default_bar()
            .template("{prefix:.bold} [{bar:30.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        pb.set_style(style);
        pb.set_prefix(format!("{title}: {subject}"));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Clears the bar and reports how the run ended.
    pub fn finish(&self, result: &Result<RunRecord, ScoutError>) {
        self.pb.finish_and_clear();
        match result {
            Ok(record) => println!(
                "  {} {} 完成 ({} ms)",
                self.green.apply_to("✓"),
                record.task,
                record.duration_ms
            ),
            Err(e @ ScoutError::Cancelled { .. }) => {
                println!("  {} {e}", self.yellow.apply_to("↺"));
            }
            Err(e) => println!("  {} {e}", self.red.apply_to("✗")),
        }
    }

    /// Prints the run record as pretty JSON.
    pub fn print_record(&self, record: &RunRecord) {
        let style = match record.status {
            RunStatus::Completed => &self.green,
            RunStatus::Failed => &self.red,
            RunStatus::Cancelled => &self.yellow,
        };
        eprintln!("{}", style.apply_to("─── Run Record ───"));
        println!("{}", serde_json::to_string_pretty(record).unwrap_or_default());
    }
}

impl ProgressObserver for TaskProgress {
    fn on_update(&self, state: &ProgressState) {
        self.pb.set_position(u64::from(state.percent_complete));
        match &state.current_step {
            Some(step) => self.pb.set_message(step.clone()),
            None if state.is_complete => self.pb.set_message("完成"),
            None => self.pb.set_message(""),
        }
    }
}
