use crate::record::{Record, RecordError};
use chrono::{DateTime, TimeZone, Utc};

/// Entity is a typed view over a `Record`. Construction validates every required field up
/// front, so accessors on a constructed entity are infallible.
pub trait Entity: Sized + Send + Sync {
    fn from_record(record: Record) -> Result<Self, RecordError>;

    fn record(&self) -> &Record;

    /// The entity's identifier, which is its record's name.
    fn id(&self) -> &str {
        self.record().id()
    }
}

/// Reads an optional epoch-millis simple field as a UTC timestamp.
pub(super) fn parse_timestamp_field(record: &Record, field: &str) -> Result<Option<DateTime<Utc>>, RecordError> {
    match record.parse_simple_field::<i64>(field)? {
        None => Ok(None),
        Some(millis) => match Utc.timestamp_millis_opt(millis).single() {
            Some(ts) => Ok(Some(ts)),
            None => Err(record.malformed(field, &millis.to_string())),
        },
    }
}
