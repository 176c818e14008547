use crate::model::Entity;
use crate::record::{Record, RecordError};

const SESSION_ID: &str = "SESSION_ID";
const STATE_MODEL_DEF: &str = "STATE_MODEL_DEF";
const CURRENT_STATE: &str = "CURRENT_STATE";

/// CurrentState is what one participant reports about one resource, for one of its sessions.
/// Each map field is a partition holding at least a `CURRENT_STATE` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentState {
    record: Record,
    session_id: String,
}

impl CurrentState {
    pub fn resource_name(&self) -> &str {
        self.record.id()
    }

    /// The session that wrote this record. A mismatch with the live session marks it stale.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state_model_def(&self) -> Option<&str> {
        self.record.simple_field(STATE_MODEL_DEF)
    }

    pub fn state(&self, partition: &str) -> Option<&str> {
        self.record
            .map_field(partition)
            .and_then(|fields| fields.get(CURRENT_STATE))
            .map(String::as_str)
    }

    /// `(partition, state)` for every reported partition.
    pub fn partition_states(&self) -> impl Iterator<Item = (&str, &str)> {
        self.record.map_fields().iter().filter_map(|(partition, fields)| {
            fields
                .get(CURRENT_STATE)
                .map(|state| (partition.as_str(), state.as_str()))
        })
    }
}

impl Entity for CurrentState {
    fn from_record(record: Record) -> Result<Self, RecordError> {
        let session_id = record.require_simple_field(SESSION_ID)?.to_string();
        for (partition, fields) in record.map_fields() {
            if !fields.contains_key(CURRENT_STATE) {
                return Err(record.malformed(partition, "<no CURRENT_STATE>"));
            }
        }

        Ok(CurrentState { record, session_id })
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_partition_states() {
        let mut record = Record::new("db");
        record.set_simple_field(SESSION_ID, "session_0");
        record.set_map_entry("db_0", CURRENT_STATE, "MASTER");
        record.set_map_entry("db_1", CURRENT_STATE, "SLAVE");

        let current = CurrentState::from_record(record).unwrap();

        assert_eq!(current.session_id(), "session_0");
        assert_eq!(current.state("db_0"), Some("MASTER"));
        assert_eq!(current.state("db_9"), None);
        assert_eq!(current.partition_states().count(), 2);
    }

    #[test]
    fn partition_without_state_is_malformed() {
        let mut record = Record::new("db");
        record.set_simple_field(SESSION_ID, "session_0");
        record.set_map_entry("db_0", "INFO", "moving");

        assert!(matches!(
            CurrentState::from_record(record),
            Err(RecordError::MalformedField { .. })
        ));
    }
}
