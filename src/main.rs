use cluster_controller::{
    shutdown_signal, try_create_controller, ClusterDataAccessor, ControllerConfig, ControllerOptions,
    CoordinationRpcServer, GrpcCoordinationStore, InMemoryCoordinationStore, PropertyType, Record,
};
use slog::Drain;
use std::error::Error;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::Arc;
use tokio::time::Duration;

const CLUSTER_NAME: &str = "demo-cluster";
const COORDINATION_PORT: u16 = 7701;

/// Serves an in-memory coordination store over gRPC on localhost and runs a controller against it
/// until ctrl-c.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let logger = create_root_logger();

    let store = Arc::new(InMemoryCoordinationStore::new());
    seed_cluster(&ClusterDataAccessor::new(CLUSTER_NAME, store.clone())).await?;

    let (server_shutdown_handle, server_shutdown_signal) = shutdown_signal();
    let server_addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, COORDINATION_PORT));
    let server = CoordinationRpcServer::new(logger.new(slog::o!("component" => "coordination")), store);
    let server_task = tokio::spawn(server.run(server_addr, server_shutdown_signal));

    let remote_store = connect_with_retry(&logger).await?;
    let controller = try_create_controller(
        ControllerConfig {
            cluster_name: CLUSTER_NAME.to_string(),
            instance_name: "controller_0".to_string(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            logger: logger.clone(),
            options: ControllerOptions {
                cycle_interval: Some(Duration::from_secs(5)),
                ..Default::default()
            },
            extra_stages: Vec::new(),
        },
        remote_store,
    )?;

    let report = controller.trigger_cycle("startup").await?;
    slog::info!(
        logger,
        "Startup cycle {} saw {} live instances",
        report.cycle,
        report.live_instances
    );

    tokio::signal::ctrl_c().await?;
    slog::info!(logger, "Shutting down");

    drop(controller);
    server_shutdown_handle.shutdown();
    server_task.await?;

    Ok(())
}

async fn connect_with_retry(logger: &slog::Logger) -> Result<GrpcCoordinationStore, Box<dyn Error>> {
    let mut attempts_left = 10;
    loop {
        match GrpcCoordinationStore::connect(logger.clone(), Ipv4Addr::LOCALHOST, COORDINATION_PORT).await {
            Ok(store) => return Ok(store),
            Err(e) if attempts_left > 0 => {
                slog::warn!(logger, "Coordination service not reachable yet: {}", e);
                attempts_left -= 1;
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

async fn seed_cluster(accessor: &ClusterDataAccessor<Arc<InMemoryCoordinationStore>>) -> Result<(), Box<dyn Error>> {
    let mut state_model = Record::new("MasterSlave");
    state_model.set_simple_field("INITIAL_STATE", "OFFLINE");
    state_model.set_list_field(
        "STATE_PRIORITY_LIST",
        vec!["MASTER".into(), "SLAVE".into(), "OFFLINE".into()],
    );
    accessor
        .set_property(PropertyType::StateModelDefs, &[], &state_model)
        .await?;

    let mut ideal_state = Record::new("TestDB");
    ideal_state.set_simple_field("STATE_MODEL_DEF_REF", "MasterSlave");
    ideal_state.set_simple_field("NUM_PARTITIONS", "2");
    for partition in &["TestDB_0", "TestDB_1"] {
        ideal_state.set_list_field(*partition, vec!["localhost_12918".into(), "localhost_12919".into()]);
    }
    accessor
        .set_property(PropertyType::IdealStates, &[], &ideal_state)
        .await?;

    for (i, port) in [12918, 12919].iter().enumerate() {
        let instance_name = format!("localhost_{}", port);

        let mut config = Record::new(instance_name.as_str());
        config.set_simple_field("HELIX_HOST", "localhost");
        config.set_simple_field("HELIX_PORT", port.to_string());
        config.set_simple_field("HELIX_ENABLED", "true");
        accessor.set_property(PropertyType::Configs, &[], &config).await?;

        let mut live_instance = Record::new(instance_name.as_str());
        live_instance.set_simple_field("SESSION_ID", format!("session_{}", i));
        live_instance.set_simple_field("CLUSTER_MANAGER_VERSION", env!("CARGO_PKG_VERSION"));
        accessor
            .set_property(PropertyType::LiveInstances, &[], &live_instance)
            .await?;
    }

    Ok(())
}

fn create_root_logger() -> slog::Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).use_file_location().build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();

    slog::Logger::root(drain, slog::o!("version" => env!("CARGO_PKG_VERSION")))
}
