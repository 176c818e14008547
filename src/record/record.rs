use std::collections::HashMap;
use std::str::FromStr;

/// Record is a named node value with three classes of fields: scalar strings, ordered string
/// lists, and string-to-string maps. Every typed entity in `crate::model` is a validated view over
/// one of these.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Record {
    id: String,
    simple_fields: HashMap<String, String>,
    list_fields: HashMap<String, Vec<String>>,
    map_fields: HashMap<String, HashMap<String, String>>,
}

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum RecordError {
    #[error("record '{record}' is missing required simple field '{field}'")]
    MissingSimpleField { record: String, field: &'static str },
    #[error("record '{record}' is missing required list field '{field}'")]
    MissingListField { record: String, field: &'static str },
    #[error("record '{record}' is missing required map field '{field}'")]
    MissingMapField { record: String, field: &'static str },
    #[error("record '{record}' field '{field}' has malformed value '{value}'")]
    MalformedField {
        record: String,
        field: String,
        value: String,
    },
    #[error("record has an empty id")]
    EmptyId,
    #[error("failed to decode record bytes: {0}")]
    Decode(String),
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            ..Record::default()
        }
    }

    pub(crate) fn from_parts(
        id: String,
        simple_fields: HashMap<String, String>,
        list_fields: HashMap<String, Vec<String>>,
        map_fields: HashMap<String, HashMap<String, String>>,
    ) -> Self {
        Record {
            id,
            simple_fields,
            list_fields,
            map_fields,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn simple_fields(&self) -> &HashMap<String, String> {
        &self.simple_fields
    }

    pub fn list_fields(&self) -> &HashMap<String, Vec<String>> {
        &self.list_fields
    }

    pub fn map_fields(&self) -> &HashMap<String, HashMap<String, String>> {
        &self.map_fields
    }

    pub fn simple_field(&self, key: &str) -> Option<&str> {
        self.simple_fields.get(key).map(String::as_str)
    }

    pub fn list_field(&self, key: &str) -> Option<&[String]> {
        self.list_fields.get(key).map(Vec::as_slice)
    }

    pub fn map_field(&self, key: &str) -> Option<&HashMap<String, String>> {
        self.map_fields.get(key)
    }

    pub fn set_simple_field(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.simple_fields.insert(key.into(), value.into());
    }

    pub fn set_list_field(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.list_fields.insert(key.into(), values);
    }

    pub fn set_map_field(&mut self, key: impl Into<String>, entries: HashMap<String, String>) {
        self.map_fields.insert(key.into(), entries);
    }

    /// Inserts a single entry into the map field `key`, creating the map if needed.
    pub fn set_map_entry(&mut self, key: impl Into<String>, entry_key: impl Into<String>, value: impl Into<String>) {
        self.map_fields
            .entry(key.into())
            .or_insert_with(HashMap::new)
            .insert(entry_key.into(), value.into());
    }

    pub fn require_simple_field(&self, field: &'static str) -> Result<&str, RecordError> {
        self.simple_field(field).ok_or_else(|| RecordError::MissingSimpleField {
            record: self.id.clone(),
            field,
        })
    }

    pub fn require_list_field(&self, field: &'static str) -> Result<&[String], RecordError> {
        self.list_field(field).ok_or_else(|| RecordError::MissingListField {
            record: self.id.clone(),
            field,
        })
    }

    pub fn require_map_field(&self, field: &'static str) -> Result<&HashMap<String, String>, RecordError> {
        self.map_field(field).ok_or_else(|| RecordError::MissingMapField {
            record: self.id.clone(),
            field,
        })
    }

    /// Parses an optional simple field. Absent is `Ok(None)`; present but unparseable is an error,
    /// never a silent default.
    pub fn parse_simple_field<T: FromStr>(&self, field: &str) -> Result<Option<T>, RecordError> {
        match self.simple_field(field) {
            None => Ok(None),
            Some(raw) => raw.parse::<T>().map(Some).map_err(|_| self.malformed(field, raw)),
        }
    }

    pub(crate) fn malformed(&self, field: &str, value: &str) -> RecordError {
        RecordError::MalformedField {
            record: self.id.clone(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Parses the literal strings "true"/"false", case-insensitively.
pub(crate) fn parse_bool(record: &Record, field: &str, raw: &str) -> Result<bool, RecordError> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(record.malformed(field, raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_fail_explicitly() {
        let record = Record::new("node-1");

        assert_eq!(
            record.require_simple_field("SESSION_ID"),
            Err(RecordError::MissingSimpleField {
                record: "node-1".into(),
                field: "SESSION_ID",
            })
        );
        assert!(matches!(
            record.require_list_field("STATE_PRIORITY_LIST"),
            Err(RecordError::MissingListField { .. })
        ));
        assert!(matches!(
            record.require_map_field("partition_0"),
            Err(RecordError::MissingMapField { .. })
        ));
    }

    #[test]
    fn parse_simple_field_never_defaults_malformed_values() {
        let mut record = Record::new("node-1");
        record.set_simple_field("PORT", "12918");
        record.set_simple_field("NUM_PARTITIONS", "ten");

        assert_eq!(record.parse_simple_field::<u16>("PORT"), Ok(Some(12918)));
        assert_eq!(record.parse_simple_field::<u16>("ABSENT"), Ok(None));
        assert!(matches!(
            record.parse_simple_field::<u32>("NUM_PARTITIONS"),
            Err(RecordError::MalformedField { .. })
        ));
    }

    #[test]
    fn set_map_entry_creates_nested_map() {
        let mut record = Record::new("db");
        record.set_map_entry("db_0", "localhost_0", "MASTER");
        record.set_map_entry("db_0", "localhost_1", "SLAVE");

        let partition = record.map_field("db_0").unwrap();
        assert_eq!(partition.len(), 2);
        assert_eq!(partition.get("localhost_1").map(String::as_str), Some("SLAVE"));
    }

    #[test]
    fn parse_bool_is_strict() {
        let record = Record::new("cfg");
        assert_eq!(parse_bool(&record, "ENABLED", "TRUE"), Ok(true));
        assert_eq!(parse_bool(&record, "ENABLED", "false"), Ok(false));
        assert!(parse_bool(&record, "ENABLED", "yes").is_err());
    }
}
