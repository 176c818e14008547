//! The generic hierarchical record that every entity stored in the coordination service is built
//! from, and its byte encoding.
mod record;
mod wire;

pub(crate) use record::parse_bool;
pub use record::Record;
pub use record::RecordError;
pub use wire::decode_record;
pub use wire::encode_record;
