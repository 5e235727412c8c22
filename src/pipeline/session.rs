use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::simulator::{ProgressObserver, ProgressSimulator, StepExecutor, TimedExecutor};
use super::step::{ProgressState, RunRecord, RunStatus};
use super::task::TaskRequest;
use crate::error::ScoutError;

/// Holds the cancellation token of the run currently in flight.
///
/// Cloning yields a handle onto the same slot, so another task (a Ctrl-C
/// handler, a UI event) can cancel whatever run is current.
#[derive(Debug, Clone, Default)]
pub struct RunSlot {
    inner: Arc<Mutex<SlotInner>>,
}

#[derive(Debug, Default)]
struct SlotInner {
    generation: u64,
    token: Option<CancellationToken>,
}

/// Token handed to one run, tagged with the slot generation it belongs to.
#[derive(Debug, Clone)]
pub struct RunTicket {
    generation: u64,
    pub token: CancellationToken,
}

impl RunSlot {
    /// Cancels the previous run, if any, and returns the ticket of a new one.
    pub fn start(&self) -> RunTicket {
        let token = CancellationToken::new();
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = inner.token.replace(token.clone()) {
            previous.cancel();
        }
        inner.generation += 1;
        RunTicket {
            generation: inner.generation,
            token,
        }
    }

    /// Cancels the current run. Returns `false` if there was none.
    pub fn cancel_current(&self) -> bool {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        match inner.token.as_ref() {
            Some(token) if !token.is_cancelled() => {
                token.cancel();
                true
            }
            _ => false,
        }
    }

    /// Whether a run currently owns the slot.
    #[allow(dead_code)]
    pub fn is_active(&self) -> bool {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.token.is_some()
    }

    /// Releases the slot if `ticket` still owns it; a newer run keeps it.
    pub fn finish(&self, ticket: &RunTicket) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if inner.generation == ticket.generation {
            inner.token = None;
        }
    }
}

/// One page's worth of task state: its progress, its run slot and the record
/// of the last run.
pub struct Session<E = TimedExecutor> {
    simulator: ProgressSimulator<E>,
    state: ProgressState,
    slot: RunSlot,
    last_record: Option<RunRecord>,
}

impl Session<TimedExecutor> {
    pub fn timed(time_scale: f64) -> Self {
        Self::new(TimedExecutor::new(time_scale))
    }
}

impl<E: StepExecutor> Session<E> {
    pub fn new(executor: E) -> Self {
        Self {
            simulator: ProgressSimulator::new(executor),
            state: ProgressState::default(),
            slot: RunSlot::default(),
            last_record: None,
        }
    }

    /// Builds a session that shares its run slot with others, so that a run
    /// started from any of them supersedes the run in flight on the rest.
    #[allow(dead_code)]
    pub fn with_slot(executor: E, slot: RunSlot) -> Self {
        Self {
            simulator: ProgressSimulator::new(executor),
            state: ProgressState::default(),
            slot,
            last_record: None,
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn slot(&self) -> RunSlot {
        self.slot.clone()
    }

    pub fn last_record(&self) -> Option<&RunRecord> {
        self.last_record.as_ref()
    }

    /// Whether the last run finished every step.
    #[allow(dead_code)]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    /// Runs the request's step plan, superseding any run still in flight.
    ///
    /// The record of the run is kept on the session whatever the outcome.
    pub async fn run(
        &mut self,
        request: &TaskRequest,
        observer: &impl ProgressObserver,
    ) -> Result<RunRecord, ScoutError> {
        let kind = request.kind();
        let steps = kind.steps();
        let ticket = self.slot.start();
        let started_at = Utc::now();

        info!(task = %kind, subject = %request.subject(), "run started");
        let result = self
            .simulator
            .run(&steps, &mut self.state, observer, &ticket.token)
            .await;
        self.slot.finish(&ticket);

        let (status, halted_at) = match &result {
            Ok(()) => (RunStatus::Completed, None),
            Err(e @ ScoutError::Cancelled { .. }) => (RunStatus::Cancelled, e.step().map(String::from)),
            Err(e) => (RunStatus::Failed, e.step().map(String::from)),
        };
        let record = RunRecord::new(
            &kind.to_string(),
            &steps,
            &self.state,
            status,
            halted_at,
            started_at,
        );
        self.last_record = Some(record.clone());

        match result {
            Ok(()) => {
                info!(task = %kind, run_id = %record.run_id, duration_ms = record.duration_ms, "run finished");
                Ok(record)
            }
            Err(e) => {
                warn!(task = %kind, run_id = %record.run_id, error = %e, "run halted");
                Err(e)
            }
        }
    }
}
