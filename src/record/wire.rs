//! Byte representation of a `Record`, as stored in a coordination-service node.
//!
//! Nodes hold a protobuf-encoded `ProtoRecord`. List and map fields are wrapped in
//! `ProtoStringList`/`ProtoStringMap` because protobuf maps can't hold repeated or map values
//! directly.

use crate::grpc::{ProtoRecord, ProtoStringList, ProtoStringMap};
use crate::record::{Record, RecordError};
use bytes::Bytes;
use prost::Message;

pub fn encode_record(record: &Record) -> Bytes {
    let proto = ProtoRecord::from(record);
    let mut buf = Vec::with_capacity(proto.encoded_len());
    // Encoding into a Vec only fails on insufficient capacity, which Vec grows past.
    let _ = proto.encode(&mut buf);

    Bytes::from(buf)
}

pub fn decode_record(bytes: &[u8]) -> Result<Record, RecordError> {
    let proto = ProtoRecord::decode(bytes).map_err(|e| RecordError::Decode(e.to_string()))?;
    if proto.id.is_empty() {
        return Err(RecordError::EmptyId);
    }

    Ok(Record::from(proto))
}

// ------- Conversions --------

impl From<&Record> for ProtoRecord {
    fn from(record: &Record) -> Self {
        ProtoRecord {
            id: record.id().to_string(),
            simple_fields: record.simple_fields().clone(),
            list_fields: record
                .list_fields()
                .iter()
                .map(|(k, v)| (k.clone(), ProtoStringList { values: v.clone() }))
                .collect(),
            map_fields: record
                .map_fields()
                .iter()
                .map(|(k, v)| (k.clone(), ProtoStringMap { entries: v.clone() }))
                .collect(),
        }
    }
}

impl From<ProtoRecord> for Record {
    fn from(proto: ProtoRecord) -> Self {
        Record::from_parts(
            proto.id,
            proto.simple_fields,
            proto.list_fields.into_iter().map(|(k, v)| (k, v.values)).collect(),
            proto.map_fields.into_iter().map(|(k, v)| (k, v.entries)).collect(),
        )
    }
}
