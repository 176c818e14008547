mod controller;
mod coordination;
mod model;
mod pipeline;
mod record;
mod snapshot;
mod stages;
mod grpc {
    include!("../generated/coordination.rs");
}

pub use controller::default_pipeline;
pub use controller::try_create_controller;
pub use controller::Controller;
pub use controller::ControllerClient;
pub use controller::ControllerConfig;
pub use controller::ControllerCreationError;
pub use controller::ControllerOptions;
pub use controller::CycleError;
pub use controller::CycleReport;
pub use controller::TriggerError;
pub use coordination::shutdown_signal;
pub use coordination::ClusterDataAccessor;
pub use coordination::ConnectError;
pub use coordination::CoordinationError;
pub use coordination::CoordinationRpcServer;
pub use coordination::CoordinationStore;
pub use coordination::GrpcCoordinationStore;
pub use coordination::InMemoryCoordinationStore;
pub use coordination::PathError;
pub use coordination::PropertyType;
pub use coordination::RpcServerShutdownHandle;
pub use coordination::RpcServerShutdownSignal;
pub use model::Alerts;
pub use model::CurrentState;
pub use model::Entity;
pub use model::HealthStat;
pub use model::IdealState;
pub use model::IdealStateMode;
pub use model::InstanceConfig;
pub use model::LiveInstance;
pub use model::Message;
pub use model::MessageState;
pub use model::MessageType;
pub use model::PersistentStats;
pub use model::StateModelDefinition;
pub use pipeline::ClusterEvent;
pub use pipeline::CoordinatorInfo;
pub use pipeline::Pipeline;
pub use pipeline::PipelineError;
pub use pipeline::Stage;
pub use pipeline::StageContext;
pub use pipeline::StageError;
pub use pipeline::StagePhase;
pub use record::decode_record;
pub use record::encode_record;
pub use record::Record;
pub use record::RecordError;
pub use snapshot::ClusterDataCache;
pub use snapshot::ClusterSnapshot;
pub use snapshot::RefreshError;
pub use stages::CompatibilityCheckStage;
pub use stages::CompatibilityError;
pub use stages::ManagerVersion;
pub use stages::VersionParseError;
