use crate::playback::VideoId;
use serde::Deserialize;
use thiserror::Error;
use typed_builder::TypedBuilder;

pub mod controller;
pub mod sdk;

/// Native states of the embedded player, matching the SDK's numeric state codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerState {
	#[default]
	Unstarted,
	Ended,
	Playing,
	Paused,
	Buffering,
	Cued,
}

impl PlayerState {
	#[must_use]
	pub fn from_raw(raw: i32) -> Option<Self> {
		use PlayerState::*;
		let state = match raw {
			-1 => Unstarted,
			0 => Ended,
			1 => Playing,
			2 => Paused,
			3 => Buffering,
			5 => Cued,
			_ => return None,
		};
		Some(state)
	}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Player control call failed: {0}")]
pub struct PlayerApiError(pub String);

/// Control surface of a live player instance. Every call may fail transiently
/// (the SDK keeps internal readiness state of its own), which is why callers treat
/// these operations as best-effort.
pub trait PlayerApi: Send {
	fn play(&self) -> Result<(), PlayerApiError>;
	fn pause(&self) -> Result<(), PlayerApiError>;
	fn seek_to(&self, seconds: f64, exact: bool) -> Result<(), PlayerApiError>;
	fn load_video(&self, video_id: &VideoId, start_seconds: f64) -> Result<(), PlayerApiError>;
	fn current_time(&self) -> Result<f64, PlayerApiError>;
	fn state(&self) -> Result<PlayerState, PlayerApiError>;
	fn video_id(&self) -> Result<Option<VideoId>, PlayerApiError>;
	fn destroy(&self) -> Result<(), PlayerApiError>;
}

/// Construction parameters for a player instance. Defaults match what the
/// synchronized-watching UI needs: no autoplay, inline playback, no related-video
/// suggestions and an origin restriction for the embedding page.
#[derive(Clone, Debug, Deserialize, PartialEq, TypedBuilder)]
pub struct PlayerConfiguration {
	#[serde(default)]
	#[builder(default = false)]
	pub autoplay: bool,
	#[serde(default = "default_to_true")]
	#[builder(default = true)]
	pub inline_playback: bool,
	#[serde(default)]
	#[builder(default = false)]
	pub show_related: bool,
	#[serde(default)]
	#[builder(default)]
	pub origin: Option<String>,
}

fn default_to_true() -> bool {
	true
}

impl Default for PlayerConfiguration {
	fn default() -> Self {
		Self::builder().build()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn player_state_should_convert_from_raw_state_codes() {
		assert_eq!(Some(PlayerState::Unstarted), PlayerState::from_raw(-1));
		assert_eq!(Some(PlayerState::Ended), PlayerState::from_raw(0));
		assert_eq!(Some(PlayerState::Playing), PlayerState::from_raw(1));
		assert_eq!(Some(PlayerState::Paused), PlayerState::from_raw(2));
		assert_eq!(Some(PlayerState::Buffering), PlayerState::from_raw(3));
		assert_eq!(Some(PlayerState::Cued), PlayerState::from_raw(5));
		assert_eq!(None, PlayerState::from_raw(4));
		assert_eq!(None, PlayerState::from_raw(42));
	}

	#[test]
	fn player_configuration_should_default_to_restrained_playback() {
		let configuration = PlayerConfiguration::default();

		assert!(!configuration.autoplay);
		assert!(configuration.inline_playback);
		assert!(!configuration.show_related);
		assert_eq!(None, configuration.origin);
	}
}
