use crate::pipeline::{ClusterEvent, Stage, StageContext, StageError};
use std::fmt;

/// Pipeline runs its stages strictly in the order they were added, one at a time.
pub struct Pipeline {
    logger: slog::Logger,
    stages: Vec<Box<dyn Stage>>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StagePhase {
    PreProcess,
    Process,
}

/// PipelineError carries the failing stage's name, the phase it failed in, and the cause.
#[derive(Debug, thiserror::Error)]
#[error("stage '{stage}' failed during {phase}: {source}")]
pub struct PipelineError {
    pub stage: String,
    pub phase: StagePhase,
    pub source: StageError,
}

impl Pipeline {
    pub fn new(logger: slog::Logger) -> Self {
        Pipeline {
            logger,
            stages: Vec::new(),
        }
    }

    pub fn add_stage(&mut self, stage: Box<dyn Stage>) {
        self.stages.push(stage);
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Runs every stage over `event`. On the first `pre_process` or `process` failure, the
    /// remaining stages are not invoked and the failure is returned. A failing stage still gets
    /// its `post_process` if its `process` ran. A `post_process` failure is logged and otherwise
    /// ignored.
    pub fn handle(&mut self, context: &StageContext, event: &mut ClusterEvent) -> Result<(), PipelineError> {
        for stage in self.stages.iter_mut() {
            stage.init(context);

            if let Err(source) = stage.pre_process() {
                return Err(Self::abort(&self.logger, stage.name(), StagePhase::PreProcess, source));
            }

            let process_result = stage.process(event);

            if let Err(e) = stage.post_process() {
                slog::warn!(self.logger, "Stage '{}' post_process failed: {}", stage.name(), e);
            }

            if let Err(source) = process_result {
                return Err(Self::abort(&self.logger, stage.name(), StagePhase::Process, source));
            }
        }

        Ok(())
    }

    fn abort(logger: &slog::Logger, stage_name: &str, phase: StagePhase, source: StageError) -> PipelineError {
        slog::error!(logger, "Aborting cycle. Stage '{}' failed during {}: {}", stage_name, phase, source);
        PipelineError {
            stage: stage_name.to_string(),
            phase,
            source,
        }
    }
}

impl fmt::Display for StagePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StagePhase::PreProcess => write!(f, "pre_process"),
            StagePhase::Process => write!(f, "process"),
        }
    }
}
