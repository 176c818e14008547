use std::convert::TryFrom;
use tokio::time::Duration;

#[derive(Clone, Default)]
pub struct ControllerOptions {
    /// How often a cycle runs without an explicit trigger.
    pub cycle_interval: Option<Duration>,
    /// Capacity of the controller's event queue.
    pub trigger_queue_size: Option<usize>,
}

#[derive(Debug)]
pub(super) struct ControllerOptionsValidated {
    pub cycle_interval: Duration,
    pub trigger_queue_size: usize,
}

impl ControllerOptionsValidated {
    fn validate(&self) -> Result<(), &'static str> {
        if self.cycle_interval == Duration::from_secs(0) {
            return Err("Cycle interval must be greater than zero");
        }
        if self.trigger_queue_size == 0 {
            return Err("Trigger queue size must be greater than zero");
        }

        Ok(())
    }
}

impl TryFrom<ControllerOptions> for ControllerOptionsValidated {
    type Error = &'static str;

    fn try_from(options: ControllerOptions) -> Result<Self, Self::Error> {
        let values = ControllerOptionsValidated {
            cycle_interval: options.cycle_interval.unwrap_or(Duration::from_secs(30)),
            trigger_queue_size: options.trigger_queue_size.unwrap_or(16),
        };

        values.validate()?;
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let validated = ControllerOptionsValidated::try_from(ControllerOptions::default()).unwrap();
        assert_eq!(validated.cycle_interval, Duration::from_secs(30));
        assert_eq!(validated.trigger_queue_size, 16);
    }

    #[test]
    fn zero_values_are_rejected() {
        let zero_interval = ControllerOptions {
            cycle_interval: Some(Duration::from_secs(0)),
            ..Default::default()
        };
        assert!(ControllerOptionsValidated::try_from(zero_interval).is_err());

        let zero_queue = ControllerOptions {
            trigger_queue_size: Some(0),
            ..Default::default()
        };
        assert!(ControllerOptionsValidated::try_from(zero_queue).is_err());
    }
}
