use crate::connection::sender::EventSender;
use crate::message::client_event::PlayerEventPayload;
use crate::message::server_event::PlaybackEventPayload;
use crate::playback::PlaybackSnapshot;
use crate::player::sdk::{SdkProvider, SharedSdk};
use crate::player::{PlayerApi, PlayerApiError, PlayerConfiguration, PlayerState};
use crate::utils::wall_clock::WallClock;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Seeks are only issued once playback has drifted further than this. Every seek
/// risks a visible rebuffering stall, so precision is traded for smoothness.
const SEEK_DRIFT_THRESHOLD_SECONDS: f64 = 1.2;

/// Owns one player instance and reconciles it with the shared playback state.
/// All mutable state lives in this single owner, there is no concurrent access.
pub struct PlayerController {
	player: Option<Box<dyn PlayerApi>>,
	ready: bool,
	last_playback: Option<PlaybackSnapshot>,
	pending_load: Option<PlaybackSnapshot>,
	configuration: PlayerConfiguration,
	sdk: Arc<SharedSdk>,
	provider: Arc<dyn SdkProvider>,
	event_sender: EventSender,
	clock: WallClock,
}

impl PlayerController {
	pub fn new(
		configuration: PlayerConfiguration,
		sdk: Arc<SharedSdk>,
		provider: Arc<dyn SdkProvider>,
		event_sender: EventSender,
		clock: WallClock,
	) -> Self {
		Self {
			player: None,
			ready: false,
			last_playback: None,
			pending_load: None,
			configuration,
			sdk,
			provider,
			event_sender,
			clock,
		}
	}

	#[must_use]
	pub fn is_ready(&self) -> bool {
		self.ready && self.player.is_some()
	}

	/// A new video was picked somewhere in the session.
	pub async fn handle_load_event(&mut self, payload: PlaybackEventPayload) {
		let Ok(snapshot) = PlaybackSnapshot::try_from(payload) else {
			debug!("Ignoring load event without video id");
			return;
		};
		self.last_playback = Some(snapshot.clone());
		self.load(snapshot).await;
	}

	/// Play/pause/seek happened on the other side.
	pub async fn handle_sync_event(&mut self, payload: PlaybackEventPayload) {
		let Ok(snapshot) = PlaybackSnapshot::try_from(payload) else {
			debug!("Ignoring sync event without video id");
			return;
		};
		self.last_playback = Some(snapshot.clone());
		self.apply_playback(&snapshot);
	}

	/// Converges the local player to `snapshot` while avoiding unnecessary seeks.
	/// Without a controllable player this is a no-op, a later sync self-corrects.
	pub fn apply_playback(&self, snapshot: &PlaybackSnapshot) {
		let Some(player) = self.controllable_player() else {
			return;
		};

		// A different video is a switch, not a resync.
		if let Some(current_id) = best_effort("video id", player.video_id()).flatten() {
			if current_id != snapshot.video_id {
				self.load_now(snapshot);
				return;
			}
		}

		let expected_seconds = snapshot.expected_position_seconds(self.clock.now_milliseconds());
		if snapshot.is_playing {
			let current_seconds = best_effort("current time", player.current_time()).unwrap_or(0.0);
			let drift = (current_seconds - expected_seconds).abs();
			if drift > SEEK_DRIFT_THRESHOLD_SECONDS {
				best_effort("seek", player.seek_to(expected_seconds, true));
			}
			best_effort("play", player.play());
		} else {
			// Seeking a paused stream only triggers buffering with no playback benefit.
			best_effort("pause", player.pause());
		}
	}

	/// Switches the player to the snapshot's video. Before readiness the snapshot is
	/// parked in a single slot where only the most recent request survives, and
	/// player construction is (re)triggered.
	pub async fn load(&mut self, snapshot: PlaybackSnapshot) {
		if !self.is_ready() {
			self.pending_load = Some(snapshot);
			self.ensure_player().await;
			return;
		}
		self.load_now(&snapshot);
	}

	fn load_now(&self, snapshot: &PlaybackSnapshot) {
		let Some(player) = self.controllable_player() else {
			return;
		};

		let result = player
			.load_video(&snapshot.video_id, snapshot.start_seconds())
			.and_then(|()| {
				if snapshot.is_playing {
					Ok(())
				} else {
					// Loading auto-starts playback, pausing right away yields
					// the paused-at-offset state.
					player.pause()
				}
			});
		if let Err(error) = result {
			warn!("Failed to load video '{}': {error}", snapshot.video_id);
		}
	}

	/// Constructs the player through the shared SDK, at most once per controller.
	pub async fn ensure_player(&mut self) {
		if self.player.is_some() {
			return;
		}

		let Ok(sdk) = self.sdk.get_or_load(self.provider.as_ref()).await else {
			// Already logged by the SDK holder, the feature stays degraded.
			return;
		};
		match sdk.create_player(&self.configuration).await {
			Ok(player) => self.player_ready(player),
			Err(error) => error!("Failed to construct a player: {error}"),
		}
	}

	fn player_ready(&mut self, player: Box<dyn PlayerApi>) {
		self.player = Some(player);
		self.ready = true;

		// Whatever arrived while the player was being constructed is applied now.
		if let Some(pending) = self.pending_load.take() {
			self.load_now(&pending);
		} else if let Some(last_playback) = self.last_playback.clone() {
			self.apply_playback(&last_playback);
		}
	}

	/// Relays transitions into playing/paused to the other side. All other native
	/// states (buffering, ended, cued) stay local.
	pub async fn handle_state_change(&self, state: PlayerState) {
		let Some(player) = self.controllable_player() else {
			return;
		};

		let is_playing = match state {
			PlayerState::Playing => true,
			PlayerState::Paused => false,
			_ => return,
		};

		let position_seconds = best_effort("current time", player.current_time()).unwrap_or(0.0);
		let payload = PlayerEventPayload {
			is_playing,
			position_ms: milliseconds_from_seconds(position_seconds),
			sent_at_ms: self.clock.now_milliseconds(),
		};
		let _ = self.event_sender.send_player_event(payload).await;
	}

	/// User-triggered convergence. Prefers re-applying the last shared state, which
	/// re-evaluates drift against the current time instead of replaying a stale
	/// seek. Without a known shared state the local state is published instead,
	/// asking the other side to converge to this client.
	pub async fn resync(&self) {
		if let Some(last_playback) = &self.last_playback {
			self.apply_playback(last_playback);
			return;
		}

		let Some(player) = self.controllable_player() else {
			return;
		};
		let Some(position_seconds) = best_effort("current time", player.current_time()) else {
			return;
		};
		let Some(state) = best_effort("player state", player.state()) else {
			return;
		};

		let payload = PlayerEventPayload {
			is_playing: state == PlayerState::Playing,
			position_ms: milliseconds_from_seconds(position_seconds),
			sent_at_ms: self.clock.now_milliseconds(),
		};
		let _ = self.event_sender.send_player_event(payload).await;
	}

	pub fn play(&self) {
		if let Some(player) = self.controllable_player() {
			best_effort("play", player.play());
		}
	}

	pub fn pause(&self) {
		if let Some(player) = self.controllable_player() {
			best_effort("pause", player.pause());
		}
	}

	/// Destroys the player and clears all retained state so no stale continuation
	/// can act on a torn-down component.
	pub fn teardown(&mut self) {
		if let Some(player) = self.player.take() {
			best_effort("destroy", player.destroy());
		}
		self.ready = false;
		self.pending_load = None;
		self.last_playback = None;
	}

	fn controllable_player(&self) -> Option<&dyn PlayerApi> {
		if !self.ready {
			return None;
		}
		self.player.as_deref()
	}
}

/// Player control is best-effort: a failed call is logged and discarded since there
/// is no recovery at this layer and a subsequent sync self-corrects.
fn best_effort<Value>(operation: &str, result: Result<Value, PlayerApiError>) -> Option<Value> {
	result
		.map_err(|error| debug!("Best-effort player call '{operation}' failed: {error}"))
		.ok()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn milliseconds_from_seconds(seconds: f64) -> u64 {
	(seconds.max(0.0) * 1000.0).floor() as u64
}
