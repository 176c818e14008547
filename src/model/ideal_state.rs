use crate::model::Entity;
use crate::record::{Record, RecordError};
use std::collections::{BTreeSet, HashMap};

const STATE_MODEL_DEF_REF: &str = "STATE_MODEL_DEF_REF";
const IDEAL_STATE_MODE: &str = "IDEAL_STATE_MODE";
const NUM_PARTITIONS: &str = "NUM_PARTITIONS";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IdealStateMode {
    /// Partitions carry a preference list; the rebalancer picks states.
    Auto,
    /// Partitions carry an explicit instance -> state map.
    Customized,
}

/// IdealState is the desired placement of one resource group: which instances should host each
/// partition, and in what state. The record's name is the resource group name.
#[derive(Clone, Debug, PartialEq)]
pub struct IdealState {
    record: Record,
    state_model_def_ref: String,
    mode: IdealStateMode,
    num_partitions: Option<u32>,
}

impl IdealState {
    pub fn resource_name(&self) -> &str {
        self.record.id()
    }

    pub fn state_model_def_ref(&self) -> &str {
        &self.state_model_def_ref
    }

    pub fn mode(&self) -> IdealStateMode {
        self.mode
    }

    pub fn num_partitions(&self) -> Option<u32> {
        self.num_partitions
    }

    /// Every partition mentioned by either a preference list or an instance-state map, sorted.
    pub fn partitions(&self) -> BTreeSet<&str> {
        self.record
            .list_fields()
            .keys()
            .chain(self.record.map_fields().keys())
            .map(String::as_str)
            .collect()
    }

    /// Ordered list of instances preferred for `partition`, most preferred first.
    pub fn preference_list(&self, partition: &str) -> Option<&[String]> {
        self.record.list_field(partition)
    }

    pub fn instance_state_map(&self, partition: &str) -> Option<&HashMap<String, String>> {
        self.record.map_field(partition)
    }
}

impl Entity for IdealState {
    fn from_record(record: Record) -> Result<Self, RecordError> {
        let state_model_def_ref = record.require_simple_field(STATE_MODEL_DEF_REF)?.to_string();
        let mode = match record.simple_field(IDEAL_STATE_MODE) {
            None | Some("AUTO") => IdealStateMode::Auto,
            Some("CUSTOMIZED") => IdealStateMode::Customized,
            Some(other) => return Err(record.malformed(IDEAL_STATE_MODE, other)),
        };
        let num_partitions = record.parse_simple_field(NUM_PARTITIONS)?;

        Ok(IdealState {
            record,
            state_model_def_ref,
            mode,
            num_partitions,
        })
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ideal_state_record() -> Record {
        let mut record = Record::new("testResourceGroup");
        record.set_simple_field(STATE_MODEL_DEF_REF, "MasterSlave");
        record.set_simple_field(NUM_PARTITIONS, "2");
        record.set_list_field("testResourceGroup_0", vec!["localhost_0".into(), "localhost_1".into()]);
        record.set_map_entry("testResourceGroup_1", "localhost_1", "MASTER");
        record
    }

    #[test]
    fn parses_placement() {
        let ideal_state = IdealState::from_record(ideal_state_record()).unwrap();

        assert_eq!(ideal_state.resource_name(), "testResourceGroup");
        assert_eq!(ideal_state.state_model_def_ref(), "MasterSlave");
        assert_eq!(ideal_state.mode(), IdealStateMode::Auto);
        assert_eq!(ideal_state.num_partitions(), Some(2));
        assert_eq!(
            ideal_state.partitions().into_iter().collect::<Vec<_>>(),
            vec!["testResourceGroup_0", "testResourceGroup_1"]
        );
        assert_eq!(ideal_state.preference_list("testResourceGroup_0").unwrap()[0], "localhost_0");
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let mut record = ideal_state_record();
        record.set_simple_field(IDEAL_STATE_MODE, "SEMI_AUTO_ISH");

        assert!(matches!(
            IdealState::from_record(record),
            Err(RecordError::MalformedField { .. })
        ));
    }

    #[test]
    fn state_model_reference_is_required() {
        let record = Record::new("testResourceGroup");
        assert!(IdealState::from_record(record).is_err());
    }
}
