use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One named unit of simulated work with a fixed duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub duration_ms: u64,
}

impl Step {
    pub fn new(name: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            duration_ms,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Percentage reached after `completed` of `total` steps, rounded to the
/// nearest integer. Exactly 100 once every step is done.
pub fn percent_after(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    ((completed * 100 + total / 2) / total) as u8
}

/// Observable progress of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    pub percent_complete: u8,
    pub is_running: bool,
    pub is_complete: bool,
    pub completed_steps: usize,
    /// Step currently in flight, `None` when idle or finished.
    pub current_step: Option<String>,
}

impl ProgressState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn begin(&mut self, first: &Step) {
        self.reset();
        self.is_running = true;
        self.current_step = Some(first.name.clone());
    }

    /// Records the completion of step number `completed` (1-based) out of `total`.
    pub(crate) fn advance(&mut self, completed: usize, total: usize, next: Option<&Step>) {
        self.completed_steps = completed;
        self.percent_complete = percent_after(completed, total);
        self.current_step = next.map(|s| s.name.clone());
        if completed >= total {
            self.is_running = false;
            self.is_complete = true;
        }
    }

    /// Stops the run where it is; progress already made is kept.
    pub(crate) fn halt(&mut self) {
        self.is_running = false;
        self.is_complete = false;
    }
}

/// Final status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Completed,
    Failed,
    Cancelled,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Completed => write!(f, "COMPLETED"),
            RunStatus::Failed => write!(f, "FAILED"),
            RunStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// Structured record produced when a run ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: String,
    pub task: String,
    pub steps: Vec<String>,
    pub status: RunStatus,
    pub completed_steps: usize,
    pub percent_complete: u8,
    /// Step the run stopped at when it did not complete.
    pub halted_at: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_ms: i64,
}

impl RunRecord {
    pub fn new(
        task: &str,
        steps: &[Step],
        state: &ProgressState,
        status: RunStatus,
        halted_at: Option<String>,
        started_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            run_id: Uuid::new_v4().to_string(),
            task: task.to_string(),
            steps: steps.iter().map(|s| s.name.clone()).collect(),
            status,
            completed_steps: state.completed_steps,
            percent_complete: state.percent_complete,
            halted_at,
            started_at,
            completed_at: now,
            duration_ms: (now - started_at).num_milliseconds(),
        }
    }
}
