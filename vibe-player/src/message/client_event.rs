use crate::message::{Message, serialize_message_to_text_frame};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Events this client pushes to the server for relay to the other side.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ClientEvent {
	PlayerEvent(PlayerEventPayload),
}

macro_rules! client_event_from_struct {
	($enum_case: ident, $struct_type: ty) => {
		impl From<$struct_type> for ClientEvent {
			fn from(event: $struct_type) -> ClientEvent {
				ClientEvent::$enum_case(event)
			}
		}
	};
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder)]
pub struct PlayerEventPayload {
	pub is_playing: bool,
	pub position_ms: u64,
	pub sent_at_ms: i64,
}

client_event_from_struct!(PlayerEvent, PlayerEventPayload);

impl Message for ClientEvent {}

impl From<&ClientEvent> for String {
	fn from(event: &ClientEvent) -> Self {
		serialize_message_to_text_frame(event)
	}
}
