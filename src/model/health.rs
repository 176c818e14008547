//! Best-effort telemetry and alert-threshold entities. A cycle never fails because these are
//! missing.

use crate::model::entity::parse_timestamp_field;
use crate::model::Entity;
use crate::record::{Record, RecordError};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

const TIMESTAMP: &str = "TIMESTAMP";

/// HealthStat is one health report published by a participant. Each map field is a stat name
/// holding its key/value samples.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthStat {
    record: Record,
    timestamp: Option<DateTime<Utc>>,
}

impl HealthStat {
    pub fn report_name(&self) -> &str {
        self.record.id()
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn stats(&self) -> &HashMap<String, HashMap<String, String>> {
        self.record.map_fields()
    }

    pub fn stat(&self, stat_name: &str, key: &str) -> Option<&str> {
        self.record
            .map_field(stat_name)
            .and_then(|samples| samples.get(key))
            .map(String::as_str)
    }
}

impl Entity for HealthStat {
    fn from_record(record: Record) -> Result<Self, RecordError> {
        let timestamp = parse_timestamp_field(&record, TIMESTAMP)?;
        Ok(HealthStat { record, timestamp })
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

/// PersistentStats is the cluster-wide aggregate of health samples.
#[derive(Clone, Debug, PartialEq)]
pub struct PersistentStats {
    record: Record,
}

impl PersistentStats {
    pub fn stats(&self) -> &HashMap<String, HashMap<String, String>> {
        self.record.map_fields()
    }

    pub fn stat(&self, stat_name: &str) -> Option<&HashMap<String, String>> {
        self.record.map_field(stat_name)
    }
}

impl Entity for PersistentStats {
    fn from_record(record: Record) -> Result<Self, RecordError> {
        Ok(PersistentStats { record })
    }

    fn record(&self) -> &Record {
        &self.record
    }
}

/// Alerts holds alert-threshold definitions, one map field per alert expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Alerts {
    record: Record,
}

impl Alerts {
    pub fn alerts(&self) -> &HashMap<String, HashMap<String, String>> {
        self.record.map_fields()
    }

    pub fn alert(&self, expression: &str) -> Option<&HashMap<String, String>> {
        self.record.map_field(expression)
    }
}

impl Entity for Alerts {
    fn from_record(record: Record) -> Result<Self, RecordError> {
        Ok(Alerts { record })
    }

    fn record(&self) -> &Record {
        &self.record
    }
}
