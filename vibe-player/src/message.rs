use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use thiserror::Error;

pub mod client_event;
pub mod server_event;

pub trait Message: Clone + Debug + DeserializeOwned + Serialize + PartialEq {}

#[derive(Error, Debug)]
pub enum MessageError {
	#[error("Failed to deserialize message with error: '{error}'; Message was '{json}'")]
	DeserializationFailed { error: String, json: String },
}

pub(crate) fn deserialize_message_from_str<MessageType: Message>(json: &str) -> Result<MessageType, MessageError> {
	serde_json::from_str(json).map_err(|error| MessageError::DeserializationFailed {
		error: error.to_string(),
		json: json.to_string(),
	})
}

pub(crate) fn serialize_message_to_text_frame<MessageType: Message>(message: &MessageType) -> String {
	serde_json::to_string(message).expect("Failed to serialize message to JSON.")
}
