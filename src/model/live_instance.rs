use crate::model::Entity;
use crate::record::{Record, RecordError};

const SESSION_ID: &str = "SESSION_ID";
const CLUSTER_MANAGER_VERSION: &str = "CLUSTER_MANAGER_VERSION";
const LIVE_INSTANCE: &str = "LIVE_INSTANCE";

/// LiveInstance is the ephemeral registration of a participant. Its session id changes every time
/// the participant's coordination-service session is recreated, and it scopes the participant's
/// current-state sub-tree.
#[derive(Clone, Debug, PartialEq)]
pub struct LiveInstance {
    record: Record,
    session_id: String,
}

impl LiveInstance {
    pub fn instance_name(&self) -> &str {
        self.record.id()
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The participant's declared protocol version. `None` means unknown, which is not the same
    /// as version "0".
    pub fn version(&self) -> Option<&str> {
        self.record.simple_field(CLUSTER_MANAGER_VERSION)
    }

    /// Free-form process identity, typically `pid@host`.
    pub fn process_identity(&self) -> Option<&str> {
        self.record.simple_field(LIVE_INSTANCE)
    }
}

impl Entity for LiveInstance {
    fn from_record(record: Record) -> Result<Self, RecordError> {
        let session_id = record.require_simple_field(SESSION_ID)?.to_string();
        if session_id.is_empty() {
            return Err(record.malformed(SESSION_ID, ""));
        }

        Ok(LiveInstance { record, session_id })
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_is_required() {
        let result = LiveInstance::from_record(Record::new("localhost_0"));
        assert!(matches!(result, Err(RecordError::MissingSimpleField { field: SESSION_ID, .. })));
    }

    #[test]
    fn absent_version_is_unknown() {
        let mut record = Record::new("localhost_0");
        record.set_simple_field(SESSION_ID, "session_0");
        let live = LiveInstance::from_record(record).unwrap();

        assert_eq!(live.instance_name(), "localhost_0");
        assert_eq!(live.session_id(), "session_0");
        assert_eq!(live.version(), None);
    }
}
