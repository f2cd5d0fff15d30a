use crate::message::{Message, MessageError, deserialize_message_from_str};
use serde::{Deserialize, Serialize};

/// Events pushed by the server over the real-time channel.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum ServerEvent {
	/// Switch the player to a new video (somebody picked a search result).
	PlayerLoad(PlaybackEventPayload),
	/// Play/pause/seek happened on the other side.
	PlayerSync(PlaybackEventPayload),
	/// Scroll the chat container to its maximum scroll offset.
	ScrollChat,
}

/// Raw playback state as it arrives from the wire. The `video_id` is optional here
/// on purpose, validation into a [`PlaybackSnapshot`](crate::playback::PlaybackSnapshot)
/// happens at the boundary.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PlaybackEventPayload {
	#[serde(default)]
	pub video_id: Option<String>,
	pub is_playing: bool,
	pub position_ms: u64,
	pub sent_at_ms: i64,
}

impl Message for ServerEvent {}

impl TryFrom<&str> for ServerEvent {
	type Error = MessageError;

	fn try_from(json: &str) -> Result<Self, Self::Error> {
		deserialize_message_from_str(json)
	}
}
