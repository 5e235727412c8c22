use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Missing required input: {0}")]
    EmptyInput(&'static str),

    #[error("A task needs at least one step")]
    NoSteps,

    #[error("Run cancelled during step `{step}`")]
    Cancelled { step: String },

    #[error("Step `{step}` failed: {reason}")]
    StepFailed { step: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScoutError {
    /// Name of the step a halted run stopped at, if the error came from a run.
    pub fn step(&self) -> Option<&str> {
        match self {
            ScoutError::Cancelled { step } | ScoutError::StepFailed { step, .. } => Some(step),
            _ => None,
        }
    }
}
