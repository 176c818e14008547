use crate::coordination::{ClusterDataAccessor, CoordinationStore};
use crate::pipeline::{ClusterEvent, CoordinatorInfo, Pipeline, PipelineError, Stage, StageContext};
use crate::snapshot::{ClusterDataCache, ClusterSnapshot, RefreshError};
use crate::stages::CompatibilityCheckStage;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Controller drives cycles for one cluster: refresh the snapshot, build a fresh event, run the
/// pipeline. Cycles on one controller never overlap, since `run_cycle` takes `&mut self`.
pub struct Controller<S: CoordinationStore> {
    logger: slog::Logger,
    accessor: ClusterDataAccessor<S>,
    cache: ClusterDataCache,
    pipeline: Pipeline,
    coordinator: CoordinatorInfo,
    cycles_started: u64,
}

#[derive(Clone, Debug)]
pub struct CycleReport {
    pub cycle: u64,
    pub event_name: String,
    pub live_instances: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error("cycle aborted, snapshot refresh failed: {0}")]
    Refresh(#[from] RefreshError),
    #[error("cycle aborted, {0}")]
    Pipeline(#[from] PipelineError),
}

/// The stages every controller runs, in order, followed by `extra_stages`.
pub fn default_pipeline(logger: slog::Logger, extra_stages: Vec<Box<dyn Stage>>) -> Pipeline {
    let mut pipeline = Pipeline::new(logger);
    pipeline.add_stage(Box::new(CompatibilityCheckStage::new()));
    for stage in extra_stages {
        pipeline.add_stage(stage);
    }

    pipeline
}

impl<S: CoordinationStore> Controller<S> {
    pub fn new(
        logger: slog::Logger,
        accessor: ClusterDataAccessor<S>,
        pipeline: Pipeline,
        instance_name: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        let coordinator = CoordinatorInfo {
            cluster_name: accessor.cluster_name().to_string(),
            instance_name: instance_name.into(),
            version,
        };

        Controller {
            cache: ClusterDataCache::new(logger.clone()),
            logger,
            accessor,
            pipeline,
            coordinator,
            cycles_started: 0,
        }
    }

    pub fn coordinator(&self) -> &CoordinatorInfo {
        &self.coordinator
    }

    /// Snapshot published by the last successful refresh.
    pub fn snapshot(&self) -> Arc<ClusterSnapshot> {
        self.cache.snapshot()
    }

    /// Runs one full cycle. A failure is logged and returned; the controller stays usable and the
    /// next cycle starts from scratch.
    pub async fn run_cycle(&mut self, event_name: &str) -> Result<CycleReport, CycleError> {
        self.cycles_started += 1;
        let cycle = self.cycles_started;
        let logger = self.logger.new(slog::o!("cycle" => cycle, "event" => event_name.to_string()));
        let started_at = Utc::now();
        slog::info!(logger, "Starting cycle");

        if let Err(e) = self.cache.refresh(&self.accessor).await {
            slog::error!(logger, "Cycle failed: {}", e);
            return Err(CycleError::Refresh(e));
        }

        let snapshot = self.cache.snapshot();
        let live_instances = snapshot.live_instances().len();
        let mut event = ClusterEvent::new(event_name, snapshot, self.coordinator.clone());
        let context = StageContext::new(logger.clone(), cycle);

        // The pipeline logs the failing stage itself.
        self.pipeline.handle(&context, &mut event)?;

        let finished_at = Utc::now();
        slog::info!(
            logger,
            "Cycle finished in {}ms over {} live instances",
            (finished_at - started_at).num_milliseconds(),
            live_instances
        );

        Ok(CycleReport {
            cycle,
            event_name: event_name.to_string(),
            live_instances,
            started_at,
            finished_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordination::{InMemoryCoordinationStore, PropertyType};
    use crate::pipeline::StageError;
    use crate::record::Record;
    use crate::stages::CompatibilityError;
    use std::sync::Mutex;

    struct SnapshotSpy {
        seen: Arc<Mutex<Vec<usize>>>,
    }

    impl Stage for SnapshotSpy {
        fn name(&self) -> &str {
            "SnapshotSpy"
        }

        fn process(&mut self, event: &mut ClusterEvent) -> Result<(), StageError> {
            let live_instances = event.snapshot().live_instances().len();
            self.seen.lock().unwrap().push(live_instances);
            Ok(())
        }
    }

    fn logger() -> slog::Logger {
        slog::Logger::root(slog::Discard, slog::o!())
    }

    async fn add_live_instance(accessor: &ClusterDataAccessor<Arc<InMemoryCoordinationStore>>, name: &str, version: &str) {
        let mut record = Record::new(name);
        record.set_simple_field("SESSION_ID", format!("{}_session", name));
        record.set_simple_field("CLUSTER_MANAGER_VERSION", version);
        accessor
            .set_property(PropertyType::LiveInstances, &[], &record)
            .await
            .unwrap();
    }

    fn controller(
        store: &Arc<InMemoryCoordinationStore>,
        version: Option<&str>,
        seen: &Arc<Mutex<Vec<usize>>>,
    ) -> Controller<Arc<InMemoryCoordinationStore>> {
        let pipeline = default_pipeline(logger(), vec![Box::new(SnapshotSpy { seen: seen.clone() })]);
        Controller::new(
            logger(),
            ClusterDataAccessor::new("test-cluster", store.clone()),
            pipeline,
            "controller_0",
            version.map(str::to_string),
        )
    }

    #[tokio::test]
    async fn each_cycle_sees_a_fresh_snapshot() {
        let store = Arc::new(InMemoryCoordinationStore::new());
        let accessor = ClusterDataAccessor::new("test-cluster", store.clone());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut controller = controller(&store, Some("0.4.0"), &seen);

        add_live_instance(&accessor, "localhost_0", "0.4.0").await;
        let first = controller.run_cycle("first").await.unwrap();
        add_live_instance(&accessor, "localhost_1", "0.3.9").await;
        let second = controller.run_cycle("second").await.unwrap();

        assert_eq!((first.cycle, first.live_instances), (1, 1));
        assert_eq!((second.cycle, second.live_instances), (2, 2));
        assert_eq!(second.event_name, "second");
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn incompatible_participant_aborts_before_later_stages() {
        let store = Arc::new(InMemoryCoordinationStore::new());
        let accessor = ClusterDataAccessor::new("test-cluster", store.clone());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut controller = controller(&store, Some("0.2.12"), &seen);

        add_live_instance(&accessor, "localhost_0", "0.3.4").await;
        let result = controller.run_cycle("test").await;

        match result {
            Err(CycleError::Pipeline(e)) => {
                assert_eq!(e.stage, CompatibilityCheckStage::NAME);
                assert!(matches!(
                    e.source,
                    StageError::Compatibility(CompatibilityError::IncompatibleVersion { .. })
                ));
            }
            other => panic!("expected pipeline failure, got {:?}", other),
        }
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_required_record_fails_refresh() {
        let store = Arc::new(InMemoryCoordinationStore::new());
        let accessor = ClusterDataAccessor::new("test-cluster", store.clone());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut controller = controller(&store, Some("0.4.0"), &seen);

        // No STATE_MODEL_DEF_REF.
        accessor
            .set_property(PropertyType::IdealStates, &[], &Record::new("TestDB"))
            .await
            .unwrap();

        let result = controller.run_cycle("test").await;
        assert!(matches!(result, Err(CycleError::Refresh(ref e)) if e.kind == PropertyType::IdealStates));
        assert!(seen.lock().unwrap().is_empty());

        // The controller keeps going once the record is fixed.
        let mut fixed = Record::new("TestDB");
        fixed.set_simple_field("STATE_MODEL_DEF_REF", "MasterSlave");
        accessor
            .set_property(PropertyType::IdealStates, &[], &fixed)
            .await
            .unwrap();
        assert!(controller.run_cycle("test").await.is_ok());
        assert_eq!(controller.snapshot().ideal_states().len(), 1);
    }
}
