use crate::model::Entity;
use crate::record::{Record, RecordError};

const INITIAL_STATE: &str = "INITIAL_STATE";
const STATE_PRIORITY_LIST: &str = "STATE_PRIORITY_LIST";
const STATE_TRANSITION_PRIORITY_LIST: &str = "STATE_TRANSITION_PRIORITYLIST";
const NEXT_SUFFIX: &str = ".next";

/// StateModelDefinition is a named finite-state machine: the set of states in priority order,
/// the initial state, and the allowed transitions.
///
/// Next-hop routing lives in map fields named `<state>.next`, mapping a destination state to the
/// state to move to next when travelling from `<state>` towards that destination.
#[derive(Clone, Debug, PartialEq)]
pub struct StateModelDefinition {
    record: Record,
    initial_state: String,
}

impl StateModelDefinition {
    pub fn name(&self) -> &str {
        self.record.id()
    }

    pub fn initial_state(&self) -> &str {
        &self.initial_state
    }

    /// States, highest priority first.
    pub fn state_priority_list(&self) -> &[String] {
        // Presence is validated in `from_record`.
        self.record.list_field(STATE_PRIORITY_LIST).unwrap_or(&[])
    }

    /// Transitions as `FROM-TO` strings, highest priority first.
    pub fn transition_priority_list(&self) -> &[String] {
        self.record.list_field(STATE_TRANSITION_PRIORITY_LIST).unwrap_or(&[])
    }

    /// The state to move to from `from` when the goal is `to`.
    pub fn next_state(&self, from: &str, to: &str) -> Option<&str> {
        self.record
            .map_field(&format!("{}{}", from, NEXT_SUFFIX))
            .and_then(|hops| hops.get(to))
            .map(String::as_str)
    }

    pub fn is_transition_allowed(&self, from: &str, to: &str) -> bool {
        let transitions = self.transition_priority_list();
        if transitions.is_empty() {
            return self.next_state(from, to) == Some(to);
        }

        let wanted = format!("{}-{}", from, to);
        transitions.iter().any(|t| *t == wanted)
    }
}

impl Entity for StateModelDefinition {
    fn from_record(record: Record) -> Result<Self, RecordError> {
        let initial_state = record.require_simple_field(INITIAL_STATE)?.to_string();
        let states = record.require_list_field(STATE_PRIORITY_LIST)?;
        if !states.iter().any(|s| *s == initial_state) {
            return Err(record.malformed(INITIAL_STATE, &initial_state));
        }

        Ok(StateModelDefinition { record, initial_state })
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn master_slave() -> Record {
        let mut record = Record::new("MasterSlave");
        record.set_simple_field(INITIAL_STATE, "OFFLINE");
        record.set_list_field(
            STATE_PRIORITY_LIST,
            vec!["MASTER".into(), "SLAVE".into(), "OFFLINE".into()],
        );
        record.set_list_field(
            STATE_TRANSITION_PRIORITY_LIST,
            vec!["MASTER-SLAVE".into(), "SLAVE-MASTER".into(), "OFFLINE-SLAVE".into(), "SLAVE-OFFLINE".into()],
        );
        record.set_map_entry("OFFLINE.next", "MASTER", "SLAVE");
        record.set_map_entry("OFFLINE.next", "SLAVE", "SLAVE");
        record
    }

    #[test]
    fn routes_through_intermediate_states() {
        let def = StateModelDefinition::from_record(master_slave()).unwrap();

        assert_eq!(def.initial_state(), "OFFLINE");
        assert_eq!(def.state_priority_list()[0], "MASTER");
        assert_eq!(def.next_state("OFFLINE", "MASTER"), Some("SLAVE"));
        assert!(def.is_transition_allowed("OFFLINE", "SLAVE"));
        assert!(!def.is_transition_allowed("OFFLINE", "MASTER"));
    }

    #[test]
    fn initial_state_must_be_a_known_state() {
        let mut record = master_slave();
        record.set_simple_field(INITIAL_STATE, "DROPPED");

        assert!(matches!(
            StateModelDefinition::from_record(record),
            Err(RecordError::MalformedField { .. })
        ));
    }
}
