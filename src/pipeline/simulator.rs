use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::step::{ProgressState, Step};
use crate::error::ScoutError;

/// Carries out the work behind one step.
pub trait StepExecutor {
    fn execute(&self, step: &Step) -> impl Future<Output = Result<(), String>> + Send;
}

/// Receives a snapshot of the progress state every time it changes.
pub trait ProgressObserver {
    fn on_update(&self, state: &ProgressState);
}

impl<F: Fn(&ProgressState)> ProgressObserver for F {
    fn on_update(&self, state: &ProgressState) {
        self(state)
    }
}

/// Observer that ignores every update.
#[cfg(test)]
pub struct Silent;

#[cfg(test)]
impl ProgressObserver for Silent {
    fn on_update(&self, _state: &ProgressState) {}
}

/// Largest accepted time scale.
pub const MAX_TIME_SCALE: f64 = 1000.0;

/// `duration * scale`, or `None` when the product is negative, not finite or
/// too large for a [`Duration`].
pub fn scale_duration(duration: Duration, scale: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(duration.as_secs_f64() * scale).ok()
}

/// Default executor: waits out the step's duration and always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct TimedExecutor {
    time_scale: f64,
}

impl Default for TimedExecutor {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

impl TimedExecutor {
    /// Scales outside `0.0..=MAX_TIME_SCALE` fall back to real time.
    pub fn new(time_scale: f64) -> Self {
        let time_scale = if (0.0..=MAX_TIME_SCALE).contains(&time_scale) {
            time_scale
        } else {
            1.0
        };
        Self { time_scale }
    }

    #[allow(dead_code)]
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }
}

impl StepExecutor for TimedExecutor {
    async fn execute(&self, step: &Step) -> Result<(), String> {
        let Some(delay) = scale_duration(step.duration(), self.time_scale) else {
            return Err(format!("cannot scale {} ms by {}", step.duration_ms, self.time_scale));
        };
        if !delay.is_zero() {
            sleep(delay).await;
        }
        Ok(())
    }
}

/// Runs an ordered plan of steps, one after another, reporting progress.
pub struct ProgressSimulator<E = TimedExecutor> {
    executor: E,
}

impl<E: StepExecutor> ProgressSimulator<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Executes `steps` strictly in order.
    ///
    /// `state` is reset at start and the observer sees it once when the run
    /// begins and once after every completed step. A cancelled token or a
    /// failing executor halts the run at the current step; no further updates
    /// are emitted.
    pub async fn run(
        &self,
        steps: &[Step],
        state: &mut ProgressState,
        observer: &impl ProgressObserver,
        cancel: &CancellationToken,
    ) -> Result<(), ScoutError> {
        let Some(first) = steps.first() else {
            return Err(ScoutError::NoSteps);
        };

        state.begin(first);
        observer.on_update(state);

        let total = steps.len();
        for (index, step) in steps.iter().enumerate() {
            debug!(step = %step.name, duration_ms = step.duration_ms, "step started");

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    state.halt();
                    warn!(step = %step.name, "run cancelled");
                    return Err(ScoutError::Cancelled { step: step.name.clone() });
                }
                outcome = self.executor.execute(step) => outcome,
            };

            if let Err(reason) = outcome {
                state.halt();
                warn!(step = %step.name, %reason, "step failed");
                return Err(ScoutError::StepFailed {
                    step: step.name.clone(),
                    reason,
                });
            }

            state.advance(index + 1, total, steps.get(index + 1));
            observer.on_update(state);
        }

        info!(steps = total, "run complete");
        Ok(())
    }
}
