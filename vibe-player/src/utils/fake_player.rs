use crate::playback::VideoId;
use crate::player::{PlayerApi, PlayerApiError, PlayerState};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum PlayerCall {
	Play,
	Pause,
	SeekTo { seconds: f64, exact: bool },
	LoadVideo { video_id: VideoId, start_seconds: f64 },
	Destroy,
}

/// Recording player double. Clones share the same recorded state, so a test can
/// hand one clone to the controller and inspect the other.
#[derive(Clone, Default)]
pub struct FakePlayer {
	inner: Arc<Mutex<FakePlayerInner>>,
}

#[derive(Default)]
struct FakePlayerInner {
	calls: Vec<PlayerCall>,
	current_time: f64,
	state: PlayerState,
	video_id: Option<VideoId>,
	failing: bool,
}

impl FakePlayer {
	pub fn set_current_time(&self, seconds: f64) {
		self.inner.lock().current_time = seconds;
	}

	pub fn set_state(&self, state: PlayerState) {
		self.inner.lock().state = state;
	}

	pub fn set_video_id(&self, video_id: Option<VideoId>) {
		self.inner.lock().video_id = video_id;
	}

	/// Makes every subsequent call fail, as if the SDK lost its internal readiness.
	pub fn fail_all_calls(&self) {
		self.inner.lock().failing = true;
	}

	#[must_use]
	pub fn calls(&self) -> Vec<PlayerCall> {
		self.inner.lock().calls.clone()
	}

	pub fn take_calls(&self) -> Vec<PlayerCall> {
		std::mem::take(&mut self.inner.lock().calls)
	}

	fn record(&self, call: PlayerCall) -> Result<(), PlayerApiError> {
		let mut inner = self.inner.lock();
		inner.calls.push(call);
		if inner.failing {
			return Err(PlayerApiError("fake player is failing".to_string()));
		}
		Ok(())
	}
}

impl PlayerApi for FakePlayer {
	fn play(&self) -> Result<(), PlayerApiError> {
		self.record(PlayerCall::Play)
	}

	fn pause(&self) -> Result<(), PlayerApiError> {
		self.record(PlayerCall::Pause)
	}

	fn seek_to(&self, seconds: f64, exact: bool) -> Result<(), PlayerApiError> {
		self.record(PlayerCall::SeekTo { seconds, exact })
	}

	fn load_video(&self, video_id: &VideoId, start_seconds: f64) -> Result<(), PlayerApiError> {
		self.record(PlayerCall::LoadVideo {
			video_id: video_id.clone(),
			start_seconds,
		})
	}

	fn current_time(&self) -> Result<f64, PlayerApiError> {
		let inner = self.inner.lock();
		if inner.failing {
			return Err(PlayerApiError("fake player is failing".to_string()));
		}
		Ok(inner.current_time)
	}

	fn state(&self) -> Result<PlayerState, PlayerApiError> {
		let inner = self.inner.lock();
		if inner.failing {
			return Err(PlayerApiError("fake player is failing".to_string()));
		}
		Ok(inner.state)
	}

	fn video_id(&self) -> Result<Option<VideoId>, PlayerApiError> {
		let inner = self.inner.lock();
		if inner.failing {
			return Err(PlayerApiError("fake player is failing".to_string()));
		}
		Ok(inner.video_id.clone())
	}

	fn destroy(&self) -> Result<(), PlayerApiError> {
		self.record(PlayerCall::Destroy)
	}
}
