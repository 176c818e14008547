use crate::pipeline::{ClusterEvent, Stage, StageContext, StageError};
use crate::stages::{ManagerVersion, VersionParseError};
use std::cmp::Ordering;

/// CompatibilityCheckStage fails the cycle unless the coordinator knows its own version and is
/// not older, by `(major, minor)`, than any live participant. Participants with no declared
/// version are skipped. The stage never mutates the event.
pub struct CompatibilityCheckStage {
    logger: Option<slog::Logger>,
}

#[derive(Debug, thiserror::Error)]
pub enum CompatibilityError {
    #[error("coordinator version is unknown")]
    MissingCoordinatorVersion,
    #[error("{owner} declares unparseable version '{version}': {source}")]
    InvalidVersion {
        owner: String,
        version: String,
        source: VersionParseError,
    },
    #[error("coordinator version {coordinator_version} is older than version {participant_version} of participant {instance}")]
    IncompatibleVersion {
        instance: String,
        coordinator_version: String,
        participant_version: String,
    },
}

impl CompatibilityCheckStage {
    pub const NAME: &'static str = "CompatibilityCheckStage";

    pub fn new() -> Self {
        CompatibilityCheckStage { logger: None }
    }

    fn parse(owner: &str, version: &str) -> Result<ManagerVersion, CompatibilityError> {
        version.parse().map_err(|source| CompatibilityError::InvalidVersion {
            owner: owner.to_string(),
            version: version.to_string(),
            source,
        })
    }

    fn check(&self, event: &ClusterEvent) -> Result<(), CompatibilityError> {
        let coordinator = event.coordinator();
        let coordinator_version_str = coordinator
            .version
            .as_deref()
            .ok_or(CompatibilityError::MissingCoordinatorVersion)?;
        let coordinator_version = Self::parse(
            &format!("coordinator {}", coordinator.instance_name),
            coordinator_version_str,
        )?;

        let mut live_instances: Vec<_> = event.snapshot().live_instances().values().collect();
        live_instances.sort_by(|a, b| a.instance_name().cmp(b.instance_name()));

        for live_instance in live_instances {
            let participant_version_str = match live_instance.version() {
                Some(version) => version,
                None => {
                    if let Some(logger) = &self.logger {
                        slog::debug!(
                            logger,
                            "Participant {} declares no version, skipping compatibility check",
                            live_instance.instance_name()
                        );
                    }
                    continue;
                }
            };
            let participant_version = Self::parse(
                &format!("participant {}", live_instance.instance_name()),
                participant_version_str,
            )?;

            if coordinator_version.compare_major_minor(&participant_version) == Ordering::Less {
                return Err(CompatibilityError::IncompatibleVersion {
                    instance: live_instance.instance_name().to_string(),
                    coordinator_version: coordinator_version_str.to_string(),
                    participant_version: participant_version_str.to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Default for CompatibilityCheckStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for CompatibilityCheckStage {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn init(&mut self, context: &StageContext) {
        self.logger = Some(context.logger().new(slog::o!("stage" => Self::NAME)));
    }

    fn process(&mut self, event: &mut ClusterEvent) -> Result<(), StageError> {
        self.check(event).map_err(StageError::from)
    }
}
