use crate::pipeline::ClusterEvent;
use crate::stages::CompatibilityError;
use std::error::Error;

/// StageContext is handed to every stage's `init`. It carries no cluster data.
#[derive(Clone)]
pub struct StageContext {
    logger: slog::Logger,
    cycle: u64,
}

impl StageContext {
    pub fn new(logger: slog::Logger, cycle: u64) -> Self {
        StageContext { logger, cycle }
    }

    pub fn logger(&self) -> &slog::Logger {
        &self.logger
    }

    /// Monotonic number of the cycle this context belongs to.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}

/// Stage is one step of a cycle. The pipeline calls, in order and at most once per cycle:
///
/// 1. `init` - setup, no cluster data visible.
/// 2. `pre_process` - pre-flight check, no access to the event.
/// 3. `process` - the stage's work over the shared event.
/// 4. `post_process` - cleanup; runs whenever `process` ran, even if it failed.
///
/// A stage must not assume it is reused across cycles.
pub trait Stage: Send {
    fn name(&self) -> &str;

    fn init(&mut self, _context: &StageContext) {}

    fn pre_process(&mut self) -> Result<(), StageError> {
        Ok(())
    }

    fn process(&mut self, event: &mut ClusterEvent) -> Result<(), StageError>;

    fn post_process(&mut self) -> Result<(), StageError> {
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error(transparent)]
    Compatibility(#[from] CompatibilityError),
    #[error("required event attribute '{0}' is missing")]
    MissingAttribute(String),
    #[error("{0}")]
    Failed(Box<dyn Error + Send + Sync>),
}
