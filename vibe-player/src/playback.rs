use crate::message::server_event::PlaybackEventPayload;
use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use typed_builder::TypedBuilder;

/// Opaque identifier of a video as understood by the embedded player.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, From, Into, Deref, Display)]
pub struct VideoId(String);

impl From<&str> for VideoId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

/// The last known playback state of the shared session, either observed locally or
/// received from the other side. `sent_at_ms` is the sender's wall clock; the only
/// assumption made about it is that `now - sent_at_ms` approximates how long the
/// snapshot has been in flight.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct PlaybackSnapshot {
	pub video_id: VideoId,
	pub is_playing: bool,
	pub position_ms: u64,
	pub sent_at_ms: i64,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SnapshotError {
	#[error("Playback event is missing a video id")]
	MissingVideoId,
}

impl TryFrom<PlaybackEventPayload> for PlaybackSnapshot {
	type Error = SnapshotError;

	fn try_from(payload: PlaybackEventPayload) -> Result<Self, Self::Error> {
		let video_id = match payload.video_id {
			Some(id) if !id.is_empty() => VideoId::from(id),
			_ => return Err(SnapshotError::MissingVideoId),
		};

		Ok(Self {
			video_id,
			is_playing: payload.is_playing,
			position_ms: payload.position_ms,
			sent_at_ms: payload.sent_at_ms,
		})
	}
}

impl PlaybackSnapshot {
	/// Where playback should be by `now_ms`, assuming the remote side kept playing
	/// since the snapshot was taken. Clamped at the start of the video.
	#[must_use]
	#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
	pub fn expected_position_milliseconds(&self, now_ms: i64) -> u64 {
		let elapsed = now_ms - self.sent_at_ms;
		(self.position_ms as i64).saturating_add(elapsed).max(0) as u64
	}

	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn expected_position_seconds(&self, now_ms: i64) -> f64 {
		self.expected_position_milliseconds(now_ms) as f64 / 1000.0
	}

	/// Starting offset for a fresh load of this snapshot's video.
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn start_seconds(&self) -> f64 {
		self.position_ms as f64 / 1000.0
	}
}
