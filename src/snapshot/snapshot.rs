use crate::model::{
    Alerts, CurrentState, HealthStat, IdealState, InstanceConfig, LiveInstance, Message, PersistentStats,
    StateModelDefinition,
};
use std::collections::{HashMap, HashSet};

/// ClusterSnapshot is one internally-consistent, point-in-time view of the cluster, produced by a
/// completed `ClusterDataCache::refresh()`. It is never mutated after publication; every stage of
/// a cycle reads the same instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterSnapshot {
    pub(super) ideal_states: HashMap<String, IdealState>,
    pub(super) live_instances: HashMap<String, LiveInstance>,
    pub(super) state_model_defs: HashMap<String, StateModelDefinition>,
    pub(super) instance_configs: HashMap<String, InstanceConfig>,
    // instance -> session -> resource
    pub(super) current_states: HashMap<String, HashMap<String, HashMap<String, CurrentState>>>,
    // instance -> msg id
    pub(super) messages: HashMap<String, HashMap<String, Message>>,
    // instance -> report name
    pub(super) health_stats: HashMap<String, HashMap<String, HealthStat>>,
    pub(super) persistent_stats: Option<PersistentStats>,
    pub(super) alerts: Option<Alerts>,
}

impl ClusterSnapshot {
    pub fn ideal_states(&self) -> &HashMap<String, IdealState> {
        &self.ideal_states
    }

    pub fn ideal_state(&self, resource: &str) -> Option<&IdealState> {
        self.ideal_states.get(resource)
    }

    pub fn live_instances(&self) -> &HashMap<String, LiveInstance> {
        &self.live_instances
    }

    pub fn live_instance(&self, instance: &str) -> Option<&LiveInstance> {
        self.live_instances.get(instance)
    }

    pub fn state_model_defs(&self) -> &HashMap<String, StateModelDefinition> {
        &self.state_model_defs
    }

    pub fn state_model_def(&self, state_model_def_ref: &str) -> Option<&StateModelDefinition> {
        self.state_model_defs.get(state_model_def_ref)
    }

    pub fn instance_configs(&self) -> &HashMap<String, InstanceConfig> {
        &self.instance_configs
    }

    pub fn instance_config(&self, instance: &str) -> Option<&InstanceConfig> {
        self.instance_configs.get(instance)
    }

    /// Current state per resource for `(instance, session)`. Always `Some` for a live instance's
    /// live session, even when it has reported nothing yet.
    pub fn current_state(&self, instance: &str, session_id: &str) -> Option<&HashMap<String, CurrentState>> {
        self.current_states
            .get(instance)
            .and_then(|sessions| sessions.get(session_id))
    }

    /// Current state for a live instance's live session.
    pub fn live_current_state(&self, instance: &str) -> Option<&HashMap<String, CurrentState>> {
        let live = self.live_instances.get(instance)?;
        self.current_state(instance, live.session_id())
    }

    /// Sessions with retained current state that aren't the instance's live session, sorted.
    /// Kept for diagnostics only; decisions must use the live session.
    pub fn stale_sessions(&self, instance: &str) -> Vec<&str> {
        let live_session = self.live_instances.get(instance).map(LiveInstance::session_id);
        let mut stale: Vec<&str> = self
            .current_states
            .get(instance)
            .map(|sessions| {
                sessions
                    .keys()
                    .map(String::as_str)
                    .filter(|session| Some(*session) != live_session)
                    .collect()
            })
            .unwrap_or_default();
        stale.sort_unstable();
        stale
    }

    /// Pending messages for `instance`. Always `Some` for a live instance.
    pub fn messages(&self, instance: &str) -> Option<&HashMap<String, Message>> {
        self.messages.get(instance)
    }

    pub fn health_stats(&self, instance: &str) -> Option<&HashMap<String, HealthStat>> {
        self.health_stats.get(instance)
    }

    pub fn persistent_stats(&self) -> Option<&PersistentStats> {
        self.persistent_stats.as_ref()
    }

    pub fn alerts(&self) -> Option<&Alerts> {
        self.alerts.as_ref()
    }

    /// Instances that are disabled globally or specifically for `resource`. Derived on every
    /// call from the instance configs.
    pub fn disabled_instances_for_resource(&self, resource: &str) -> HashSet<String> {
        self.instance_configs
            .values()
            .filter(|config| !config.instance_enabled() || !config.instance_enabled_for_resource(resource))
            .map(|config| config.instance_name().to_string())
            .collect()
    }
}
