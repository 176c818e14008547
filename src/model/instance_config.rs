use crate::model::Entity;
use crate::record::{parse_bool, Record, RecordError};
use std::collections::HashMap;

const HOST: &str = "HELIX_HOST";
const PORT: &str = "HELIX_PORT";
const ENABLED: &str = "HELIX_ENABLED";
const RESOURCE_ENABLED: &str = "RESOURCE_ENABLED";
const TAG_LIST: &str = "TAG_LIST";
const DISABLED_PARTITION: &str = "HELIX_DISABLED_PARTITION";

/// InstanceConfig is the administrator-controlled configuration of one participant. A disabled
/// instance, globally or for a resource, must not be assigned new work for that resource.
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceConfig {
    record: Record,
    port: Option<u16>,
    enabled: bool,
    resource_enabled: HashMap<String, bool>,
}

impl InstanceConfig {
    pub fn instance_name(&self) -> &str {
        self.record.id()
    }

    pub fn host(&self) -> Option<&str> {
        self.record.simple_field(HOST)
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Global enable flag. Defaults to enabled when unset.
    pub fn instance_enabled(&self) -> bool {
        self.enabled
    }

    /// Per-resource override. Resources without an override are enabled.
    pub fn instance_enabled_for_resource(&self, resource: &str) -> bool {
        self.resource_enabled.get(resource).copied().unwrap_or(true)
    }

    pub fn tags(&self) -> &[String] {
        self.record.list_field(TAG_LIST).unwrap_or(&[])
    }

    pub fn disabled_partitions(&self) -> &[String] {
        self.record.list_field(DISABLED_PARTITION).unwrap_or(&[])
    }

    pub fn is_partition_enabled(&self, partition: &str) -> bool {
        !self.disabled_partitions().iter().any(|p| p == partition)
    }
}

impl Entity for InstanceConfig {
    fn from_record(record: Record) -> Result<Self, RecordError> {
        let port = record.parse_simple_field(PORT)?;
        let enabled = match record.simple_field(ENABLED) {
            None => true,
            Some(raw) => parse_bool(&record, ENABLED, raw)?,
        };

        let mut resource_enabled = HashMap::new();
        if let Some(overrides) = record.map_field(RESOURCE_ENABLED) {
            for (resource, raw) in overrides {
                let field = format!("{}.{}", RESOURCE_ENABLED, resource);
                resource_enabled.insert(resource.clone(), parse_bool(&record, &field, raw)?);
            }
        }

        Ok(InstanceConfig {
            record,
            port,
            enabled,
            resource_enabled,
        })
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_enabled() {
        let config = InstanceConfig::from_record(Record::new("localhost_0")).unwrap();

        assert!(config.instance_enabled());
        assert!(config.instance_enabled_for_resource("anything"));
        assert!(config.tags().is_empty());
        assert!(config.is_partition_enabled("db_0"));
    }

    #[test]
    fn reads_overrides_tags_and_partitions() {
        let mut record = Record::new("localhost_1");
        record.set_simple_field(HOST, "localhost");
        record.set_simple_field(PORT, "12919");
        record.set_simple_field(ENABLED, "true");
        record.set_map_entry(RESOURCE_ENABLED, "db", "false");
        record.set_list_field(TAG_LIST, vec!["ssd".into()]);
        record.set_list_field(DISABLED_PARTITION, vec!["db_3".into()]);

        let config = InstanceConfig::from_record(record).unwrap();

        assert_eq!(config.host(), Some("localhost"));
        assert_eq!(config.port(), Some(12919));
        assert!(config.instance_enabled());
        assert!(!config.instance_enabled_for_resource("db"));
        assert!(config.instance_enabled_for_resource("other"));
        assert_eq!(config.tags(), &["ssd".to_string()][..]);
        assert!(!config.is_partition_enabled("db_3"));
    }

    #[test]
    fn malformed_flags_are_rejected() {
        let mut record = Record::new("localhost_2");
        record.set_simple_field(ENABLED, "maybe");
        assert!(InstanceConfig::from_record(record).is_err());

        let mut record = Record::new("localhost_2");
        record.set_map_entry(RESOURCE_ENABLED, "db", "0");
        assert!(InstanceConfig::from_record(record).is_err());
    }
}
