mod actor;
mod controller;
mod options;
#[cfg(test)]
mod test_utils;
mod time;
mod timer;
mod wiring;

pub use actor::ControllerClient;
pub use actor::TriggerError;
pub use controller::default_pipeline;
pub use controller::Controller;
pub use controller::CycleError;
pub use controller::CycleReport;
pub use options::ControllerOptions;
pub use wiring::try_create_controller;
pub use wiring::ControllerConfig;
pub use wiring::ControllerCreationError;
