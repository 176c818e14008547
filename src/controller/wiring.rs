use crate::controller::actor::{ControllerActor, ControllerClient};
use crate::controller::options::ControllerOptionsValidated;
use crate::controller::timer::CycleTimerTask;
use crate::controller::{default_pipeline, Controller, ControllerOptions};
use crate::coordination::{ClusterDataAccessor, CoordinationStore};
use crate::pipeline::Stage;
use std::convert::TryFrom;

pub struct ControllerConfig {
    pub cluster_name: String,
    pub instance_name: String,
    /// Protocol version this controller speaks, `major.minor.patch`.
    pub version: Option<String>,
    pub logger: slog::Logger,
    pub options: ControllerOptions,
    /// Run after the built-in stages, in order.
    pub extra_stages: Vec<Box<dyn Stage>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ControllerCreationError {
    #[error("Illegal options for configuring controller: {0}")]
    IllegalOptions(String),
    #[error("Cluster name must not be empty")]
    EmptyClusterName,
    #[error("Instance name must not be empty")]
    EmptyInstanceName,
}

/// Starts a controller over `store` and returns its client. The controller runs a cycle every
/// `cycle_interval`, plus one per `ControllerClient::trigger_cycle`. It stops when the last client
/// is dropped. Must be called from within a tokio runtime.
pub fn try_create_controller<S>(config: ControllerConfig, store: S) -> Result<ControllerClient, ControllerCreationError>
where
    S: CoordinationStore + 'static,
{
    if config.cluster_name.is_empty() {
        return Err(ControllerCreationError::EmptyClusterName);
    }
    if config.instance_name.is_empty() {
        return Err(ControllerCreationError::EmptyInstanceName);
    }
    let options = ControllerOptionsValidated::try_from(config.options)
        .map_err(|e| ControllerCreationError::IllegalOptions(e.to_string()))?;

    let root_logger = config.logger.new(slog::o!(
        "cluster" => config.cluster_name.clone(),
        "controller" => config.instance_name.clone()
    ));

    let pipeline = default_pipeline(root_logger.clone(), config.extra_stages);
    let controller = Controller::new(
        root_logger.clone(),
        ClusterDataAccessor::new(config.cluster_name, store),
        pipeline,
        config.instance_name,
        config.version,
    );

    let (actor_client, actor_queue_rx) = ControllerClient::new(options.trigger_queue_size);

    let controller_actor = ControllerActor::new(root_logger.clone(), actor_queue_rx, controller);
    tokio::spawn(controller_actor.run_event_loop());

    CycleTimerTask::spawn(options.cycle_interval, actor_client.weak());

    slog::info!(
        root_logger,
        "Controller started, cycle interval {:?}",
        options.cycle_interval
    );

    Ok(actor_client)
}
