use crate::pipeline::StageError;
use crate::snapshot::ClusterSnapshot;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identity of the coordinator running the pipeline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CoordinatorInfo {
    pub cluster_name: String,
    pub instance_name: String,
    /// Declared protocol version, `major.minor.patch`. `None` if the coordinator doesn't know it.
    pub version: Option<String>,
}

/// ClusterEvent is the per-cycle context shared by every stage of one cycle.
///
/// It carries the cycle's snapshot and the coordinator's identity as typed fields, plus a named
/// attribute slot for values one stage publishes for later stages. It is built fresh for every
/// cycle and is not `Clone`, so a snapshot can't leak into another cycle through it.
pub struct ClusterEvent {
    name: String,
    snapshot: Arc<ClusterSnapshot>,
    coordinator: CoordinatorInfo,
    attributes: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl ClusterEvent {
    pub fn new(name: impl Into<String>, snapshot: Arc<ClusterSnapshot>, coordinator: CoordinatorInfo) -> Self {
        ClusterEvent {
            name: name.into(),
            snapshot,
            coordinator,
            attributes: HashMap::new(),
        }
    }

    /// What triggered this cycle.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn snapshot(&self) -> &ClusterSnapshot {
        &self.snapshot
    }

    pub fn coordinator(&self) -> &CoordinatorInfo {
        &self.coordinator
    }

    /// Publishes `value` under `name`, replacing any earlier value.
    pub fn add_attribute<T: Any + Send + Sync>(&mut self, name: impl Into<String>, value: T) {
        self.attributes.insert(name.into(), Box::new(value));
    }

    /// Returns the attribute `name` if it exists and has type `T`.
    pub fn attribute<T: Any>(&self, name: &str) -> Option<&T> {
        self.attributes.get(name).and_then(|value| value.downcast_ref::<T>())
    }

    pub fn require_attribute<T: Any>(&self, name: &str) -> Result<&T, StageError> {
        self.attribute(name)
            .ok_or_else(|| StageError::MissingAttribute(name.to_string()))
    }
}

impl fmt::Debug for ClusterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut attribute_names: Vec<&String> = self.attributes.keys().collect();
        attribute_names.sort();

        f.debug_struct("ClusterEvent")
            .field("name", &self.name)
            .field("coordinator", &self.coordinator)
            .field("live_instances", &self.snapshot.live_instances().len())
            .field("attributes", &attribute_names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> ClusterEvent {
        ClusterEvent::new(
            "periodic",
            Arc::new(ClusterSnapshot::default()),
            CoordinatorInfo {
                cluster_name: "test-cluster".into(),
                instance_name: "controller_0".into(),
                version: Some("0.4.0".into()),
            },
        )
    }

    #[test]
    fn attributes_are_typed() {
        let mut event = event();
        event.add_attribute("bestPossibleState", vec!["db_0".to_string()]);

        assert_eq!(
            event.attribute::<Vec<String>>("bestPossibleState"),
            Some(&vec!["db_0".to_string()])
        );
        assert_eq!(event.attribute::<u32>("bestPossibleState"), None);
        assert!(matches!(
            event.require_attribute::<u32>("currentStateOutput"),
            Err(StageError::MissingAttribute(_))
        ));
    }
}
