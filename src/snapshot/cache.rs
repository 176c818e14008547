use crate::coordination::{ClusterDataAccessor, CoordinationError, CoordinationStore, PropertyType};
use crate::model::{
    Alerts, CurrentState, Entity, HealthStat, IdealState, InstanceConfig, LiveInstance, Message, PersistentStats,
    StateModelDefinition,
};
use crate::snapshot::ClusterSnapshot;
use std::collections::HashMap;
use std::sync::Arc;

/// ClusterDataCache pulls every sub-tree the pipeline needs from the coordination service and
/// publishes them together as one `ClusterSnapshot`.
///
/// A refresh builds the next snapshot off to the side and only swaps it in once every required
/// tree has been read, so readers of `snapshot()` never observe a refresh in progress. If a
/// required tree fails, the previously published snapshot stays in place.
pub struct ClusterDataCache {
    logger: slog::Logger,
    snapshot: Arc<ClusterSnapshot>,
}

#[derive(Debug, thiserror::Error)]
#[error("failed to read required {kind} tree: {source}")]
pub struct RefreshError {
    pub kind: PropertyType,
    pub source: CoordinationError,
}

impl ClusterDataCache {
    pub fn new(logger: slog::Logger) -> Self {
        ClusterDataCache {
            logger,
            snapshot: Arc::new(ClusterSnapshot::default()),
        }
    }

    /// The snapshot published by the most recent successful refresh.
    pub fn snapshot(&self) -> Arc<ClusterSnapshot> {
        self.snapshot.clone()
    }

    /// Re-reads every tree, in this order: ideal states, live instances, state model definitions,
    /// instance configs, then per live instance its messages, its live session's current state,
    /// and its health reports, then persistent stats and alerts.
    ///
    /// Current state of an earlier session is kept only while the instance is live and the
    /// session's sub-tree is still in the store.
    ///
    /// Health reports, persistent stats and alerts are best-effort. Any other failure is returned
    /// for the caller to abort the cycle; there is no retry in here.
    pub async fn refresh<S: CoordinationStore>(&mut self, accessor: &ClusterDataAccessor<S>) -> Result<(), RefreshError> {
        let previous = self.snapshot.clone();

        let ideal_states = required(
            PropertyType::IdealStates,
            accessor.list_and_parse::<IdealState>(PropertyType::IdealStates, &[]).await,
        )?;
        let live_instances = required(
            PropertyType::LiveInstances,
            accessor.list_and_parse::<LiveInstance>(PropertyType::LiveInstances, &[]).await,
        )?;
        for live_instance in live_instances.values() {
            slog::trace!(
                self.logger,
                "live instance: {} {}",
                live_instance.instance_name(),
                live_instance.session_id()
            );
        }
        let state_model_defs = required(
            PropertyType::StateModelDefs,
            accessor
                .list_and_parse::<StateModelDefinition>(PropertyType::StateModelDefs, &[])
                .await,
        )?;
        let instance_configs = required(
            PropertyType::Configs,
            accessor.list_and_parse::<InstanceConfig>(PropertyType::Configs, &[]).await,
        )?;

        let mut messages = HashMap::with_capacity(live_instances.len());
        for instance_name in live_instances.keys() {
            let instance_messages = required(
                PropertyType::Messages,
                accessor
                    .list_and_parse::<Message>(PropertyType::Messages, &[instance_name.as_str()])
                    .await,
            )?;
            messages.insert(instance_name.clone(), instance_messages);
        }

        // Sessions from earlier registrations are carried over while their sub-tree still exists.
        let mut current_states = HashMap::with_capacity(live_instances.len());
        for (instance_name, live_instance) in live_instances.iter() {
            let session_id = live_instance.session_id();
            let stored_sessions = required(
                PropertyType::CurrentStates,
                accessor
                    .list_keys(PropertyType::CurrentStates, &[instance_name.as_str()])
                    .await,
            )?;
            let session_current_states = required(
                PropertyType::CurrentStates,
                accessor
                    .list_and_parse::<CurrentState>(PropertyType::CurrentStates, &[instance_name.as_str(), session_id])
                    .await,
            )?;

            let mut instance_current_states: HashMap<String, HashMap<String, CurrentState>> = previous
                .current_states
                .get(instance_name)
                .map(|sessions| {
                    sessions
                        .iter()
                        .filter(|(session, _)| {
                            session.as_str() != session_id && stored_sessions.iter().any(|stored| stored == *session)
                        })
                        .map(|(session, states)| (session.clone(), states.clone()))
                        .collect()
                })
                .unwrap_or_default();
            instance_current_states.insert(session_id.to_string(), session_current_states);
            current_states.insert(instance_name.clone(), instance_current_states);
        }

        let mut health_stats = HashMap::with_capacity(live_instances.len());
        for instance_name in live_instances.keys() {
            let instance_health_stats = match accessor
                .list_and_parse::<HealthStat>(PropertyType::HealthReport, &[instance_name.as_str()])
                .await
            {
                Ok(stats) => stats,
                Err(e) => {
                    slog::warn!(self.logger, "Failed to read health reports of {}: {}", instance_name, e);
                    previous.health_stats.get(instance_name).cloned().unwrap_or_default()
                }
            };
            health_stats.insert(instance_name.clone(), instance_health_stats);
        }

        let persistent_stats = self
            .best_effort_single::<S, PersistentStats>(accessor, PropertyType::PersistentStats, &previous.persistent_stats)
            .await;
        let alerts = self
            .best_effort_single::<S, Alerts>(accessor, PropertyType::Alerts, &previous.alerts)
            .await;

        self.snapshot = Arc::new(ClusterSnapshot {
            ideal_states,
            live_instances,
            state_model_defs,
            instance_configs,
            current_states,
            messages,
            health_stats,
            persistent_stats,
            alerts,
        });

        Ok(())
    }

    // Absence means "no data". A read failure keeps whatever the previous snapshot had.
    async fn best_effort_single<S: CoordinationStore, E: Entity + Clone>(
        &self,
        accessor: &ClusterDataAccessor<S>,
        kind: PropertyType,
        previous: &Option<E>,
    ) -> Option<E> {
        match accessor.get_single::<E>(kind).await {
            Ok(Some(entity)) => Some(entity),
            Ok(None) => {
                slog::debug!(self.logger, "No {} found", kind);
                None
            }
            Err(e) => {
                slog::warn!(self.logger, "Failed to read {}: {}", kind, e);
                previous.clone()
            }
        }
    }
}

fn required<T>(kind: PropertyType, result: Result<T, CoordinationError>) -> Result<T, RefreshError> {
    result.map_err(|source| RefreshError { kind, source })
}
