use std::fmt;

/// PropertyType names each sub-tree the controller reads from the coordination service, and knows
/// how to build its path.
///
/// ```text
/// /{cluster}/IDEALSTATES/{resource}
/// /{cluster}/LIVEINSTANCES/{instance}
/// /{cluster}/STATEMODELDEFS/{state_model}
/// /{cluster}/CONFIGS/{instance}
/// /{cluster}/INSTANCES/{instance}/MESSAGES/{msg_id}
/// /{cluster}/INSTANCES/{instance}/CURRENTSTATES/{session}/{resource}
/// /{cluster}/INSTANCES/{instance}/HEALTHREPORT/{report}
/// /{cluster}/PERSISTENTSTATS
/// /{cluster}/ALERTS
/// ```
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum PropertyType {
    IdealStates,
    LiveInstances,
    StateModelDefs,
    Configs,
    Messages,
    CurrentStates,
    HealthReport,
    PersistentStats,
    Alerts,
}

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum PathError {
    #[error("{kind} path needs {expected} key(s), got {actual}")]
    WrongKeyCount {
        kind: PropertyType,
        expected: usize,
        actual: usize,
    },
    #[error("invalid path segment '{0}'")]
    InvalidSegment(String),
    #[error("{0} is a collection, not a single node")]
    NotASingleton(PropertyType),
    #[error("{0} is a single node, not a collection")]
    NotACollection(PropertyType),
    #[error("{0} collection is not keyed")]
    NotKeyed(PropertyType),
}

impl PropertyType {
    /// Number of keys needed to address the collection (or, for singletons, the node itself).
    pub fn key_count(&self) -> usize {
        match self {
            PropertyType::IdealStates
            | PropertyType::LiveInstances
            | PropertyType::StateModelDefs
            | PropertyType::Configs
            | PropertyType::PersistentStats
            | PropertyType::Alerts => 0,
            PropertyType::Messages | PropertyType::HealthReport => 1,
            PropertyType::CurrentStates => 2,
        }
    }

    pub fn is_singleton(&self) -> bool {
        matches!(self, PropertyType::PersistentStats | PropertyType::Alerts)
    }

    /// Builds the path of the collection (or singleton node) for `cluster` and `keys`.
    pub fn path(&self, cluster: &str, keys: &[&str]) -> Result<String, PathError> {
        if keys.len() != self.key_count() {
            return Err(PathError::WrongKeyCount {
                kind: *self,
                expected: self.key_count(),
                actual: keys.len(),
            });
        }
        validate_segment(cluster)?;
        for key in keys {
            validate_segment(key)?;
        }

        let path = match (self, keys) {
            (PropertyType::IdealStates, []) => format!("/{}/IDEALSTATES", cluster),
            (PropertyType::LiveInstances, []) => format!("/{}/LIVEINSTANCES", cluster),
            (PropertyType::StateModelDefs, []) => format!("/{}/STATEMODELDEFS", cluster),
            (PropertyType::Configs, []) => format!("/{}/CONFIGS", cluster),
            (PropertyType::PersistentStats, []) => format!("/{}/PERSISTENTSTATS", cluster),
            (PropertyType::Alerts, []) => format!("/{}/ALERTS", cluster),
            (PropertyType::Messages, [instance]) => format!("/{}/INSTANCES/{}/MESSAGES", cluster, instance),
            (PropertyType::HealthReport, [instance]) => format!("/{}/INSTANCES/{}/HEALTHREPORT", cluster, instance),
            (PropertyType::CurrentStates, [instance, session]) => {
                format!("/{}/INSTANCES/{}/CURRENTSTATES/{}", cluster, instance, session)
            }
            // Key count was checked above.
            _ => unreachable!("key count mismatch for {:?}", self),
        };

        Ok(path)
    }

    /// Builds the path of child `id` inside the collection addressed by `keys`.
    pub fn child_path(&self, cluster: &str, keys: &[&str], id: &str) -> Result<String, PathError> {
        if self.is_singleton() {
            return Err(PathError::NotACollection(*self));
        }
        validate_segment(id)?;

        Ok(format!("{}/{}", self.path(cluster, keys)?, id))
    }
}

impl PropertyType {
    /// Path whose children are the values of the last key, given all keys but the last. For
    /// `CurrentStates` and `["localhost_0"]` that is the node listing the instance's sessions.
    pub fn key_parent_path(&self, cluster: &str, keys: &[&str]) -> Result<String, PathError> {
        if self.key_count() == 0 {
            return Err(PathError::NotKeyed(*self));
        }
        if keys.len() + 1 != self.key_count() {
            return Err(PathError::WrongKeyCount {
                kind: *self,
                expected: self.key_count() - 1,
                actual: keys.len(),
            });
        }
        validate_segment(cluster)?;
        for key in keys {
            validate_segment(key)?;
        }

        let path = match (self, keys) {
            (PropertyType::Messages, []) | (PropertyType::HealthReport, []) => format!("/{}/INSTANCES", cluster),
            (PropertyType::CurrentStates, [instance]) => format!("/{}/INSTANCES/{}/CURRENTSTATES", cluster, instance),
            _ => unreachable!("key count mismatch for {:?}", self),
        };

        Ok(path)
    }
}

fn validate_segment(segment: &str) -> Result<(), PathError> {
    if segment.is_empty() || segment.contains('/') {
        return Err(PathError::InvalidSegment(segment.to_string()));
    }
    Ok(())
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyType::IdealStates => "IDEALSTATES",
            PropertyType::LiveInstances => "LIVEINSTANCES",
            PropertyType::StateModelDefs => "STATEMODELDEFS",
            PropertyType::Configs => "CONFIGS",
            PropertyType::Messages => "MESSAGES",
            PropertyType::CurrentStates => "CURRENTSTATES",
            PropertyType::HealthReport => "HEALTHREPORT",
            PropertyType::PersistentStats => "PERSISTENTSTATS",
            PropertyType::Alerts => "ALERTS",
        };
        write!(f, "{}", name)
    }
}
