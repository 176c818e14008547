//! Staged per-cycle pipeline. One `ClusterEvent` is built per cycle and threaded through an
//! ordered list of stages; the first stage failure aborts the rest of the cycle.
mod event;
mod pipeline;
mod stage;

pub use event::ClusterEvent;
pub use event::CoordinatorInfo;
pub use pipeline::Pipeline;
pub use pipeline::PipelineError;
pub use pipeline::StagePhase;
pub use stage::Stage;
pub use stage::StageContext;
pub use stage::StageError;
