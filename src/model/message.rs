use crate::model::entity::parse_timestamp_field;
use crate::model::Entity;
use crate::record::{Record, RecordError};
use chrono::{DateTime, Utc};

const MSG_TYPE: &str = "MSG_TYPE";
const MSG_STATE: &str = "MSG_STATE";
const SRC_NAME: &str = "SRC_NAME";
const TGT_NAME: &str = "TGT_NAME";
const TGT_SESSION_ID: &str = "TGT_SESSION_ID";
const RESOURCE_NAME: &str = "RESOURCE_NAME";
const PARTITION_NAME: &str = "PARTITION_NAME";
const FROM_STATE: &str = "FROM_STATE";
const TO_STATE: &str = "TO_STATE";
const STATE_MODEL_DEF: &str = "STATE_MODEL_DEF";
const CREATE_TIMESTAMP: &str = "CREATE_TIMESTAMP";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MessageType {
    StateTransition,
    ControllerMessage,
    TaskReply,
    NoOp,
    /// Application-defined type, kept verbatim.
    UserDefined(String),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MessageState {
    New,
    Read,
    Unprocessable,
}

/// Message is a directed instruction for one participant, usually a state-transition request for
/// one partition. The coordinator writes it, the participant consumes and deletes it.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    record: Record,
    msg_type: MessageType,
    msg_state: MessageState,
    create_timestamp: Option<DateTime<Utc>>,
}

impl Message {
    pub fn msg_id(&self) -> &str {
        self.record.id()
    }

    pub fn msg_type(&self) -> &MessageType {
        &self.msg_type
    }

    pub fn msg_state(&self) -> MessageState {
        self.msg_state
    }

    pub fn src_name(&self) -> &str {
        self.record.simple_field(SRC_NAME).unwrap_or_default()
    }

    pub fn tgt_name(&self) -> &str {
        self.record.simple_field(TGT_NAME).unwrap_or_default()
    }

    pub fn tgt_session_id(&self) -> Option<&str> {
        self.record.simple_field(TGT_SESSION_ID)
    }

    pub fn resource_name(&self) -> Option<&str> {
        self.record.simple_field(RESOURCE_NAME)
    }

    pub fn partition_name(&self) -> Option<&str> {
        self.record.simple_field(PARTITION_NAME)
    }

    pub fn from_state(&self) -> Option<&str> {
        self.record.simple_field(FROM_STATE)
    }

    pub fn to_state(&self) -> Option<&str> {
        self.record.simple_field(TO_STATE)
    }

    pub fn state_model_def(&self) -> Option<&str> {
        self.record.simple_field(STATE_MODEL_DEF)
    }

    pub fn create_timestamp(&self) -> Option<DateTime<Utc>> {
        self.create_timestamp
    }

    /// True if the message targets `session_id`, or targets no particular session.
    pub fn is_for_session(&self, session_id: &str) -> bool {
        match self.tgt_session_id() {
            None | Some("*") => true,
            Some(tgt) => tgt == session_id,
        }
    }
}

impl Entity for Message {
    fn from_record(record: Record) -> Result<Self, RecordError> {
        let msg_type = match record.require_simple_field(MSG_TYPE)? {
            "STATE_TRANSITION" => MessageType::StateTransition,
            "CONTROLLER_MSG" => MessageType::ControllerMessage,
            "TASK_REPLY" => MessageType::TaskReply,
            "NO_OP" => MessageType::NoOp,
            "" => return Err(record.malformed(MSG_TYPE, "")),
            other => MessageType::UserDefined(other.to_string()),
        };
        let msg_state = match record.simple_field(MSG_STATE) {
            None | Some("new") => MessageState::New,
            Some("read") => MessageState::Read,
            Some("unprocessable") => MessageState::Unprocessable,
            Some(other) => return Err(record.malformed(MSG_STATE, other)),
        };
        record.require_simple_field(SRC_NAME)?;
        record.require_simple_field(TGT_NAME)?;

        if msg_type == MessageType::StateTransition {
            record.require_simple_field(RESOURCE_NAME)?;
            record.require_simple_field(PARTITION_NAME)?;
            record.require_simple_field(FROM_STATE)?;
            record.require_simple_field(TO_STATE)?;
        }

        let create_timestamp = parse_timestamp_field(&record, CREATE_TIMESTAMP)?;

        Ok(Message {
            record,
            msg_type,
            msg_state,
            create_timestamp,
        })
    }

    fn record(&self) -> &Record {
        &self.record
    }
}
