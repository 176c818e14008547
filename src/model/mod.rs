mod current_state;
mod entity;
mod health;
mod ideal_state;
mod instance_config;
mod live_instance;
mod message;
mod state_model_def;

pub use current_state::CurrentState;
pub use entity::Entity;
pub use health::Alerts;
pub use health::HealthStat;
pub use health::PersistentStats;
pub use ideal_state::IdealState;
pub use ideal_state::IdealStateMode;
pub use instance_config::InstanceConfig;
pub use live_instance::LiveInstance;
pub use message::Message;
pub use message::MessageState;
pub use message::MessageType;
pub use state_model_def::StateModelDefinition;
