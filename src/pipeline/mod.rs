mod session;
mod simulator;
mod step;
mod task;

pub use session::Session;
pub use simulator::{MAX_TIME_SCALE, ProgressObserver, scale_duration};
pub use step::{ProgressState, RunRecord, RunStatus};
pub use task::TaskRequest;
