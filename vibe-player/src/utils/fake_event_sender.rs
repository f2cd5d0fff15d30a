use crate::connection::sender::{EventSender, EventSenderTrait};
use crate::message::client_event::PlayerEventPayload;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Recording stand-in for the real-time channel, capturing what the client
/// would have pushed to the server.
#[derive(Clone, Default)]
pub struct FakeEventSender {
	payloads: Arc<Mutex<Vec<PlayerEventPayload>>>,
}

impl FakeEventSender {
	#[must_use]
	pub fn sent_events(&self) -> Vec<PlayerEventPayload> {
		self.payloads.lock().clone()
	}
}

impl From<FakeEventSender> for EventSender {
	fn from(fake_event_sender: FakeEventSender) -> Self {
		Arc::pin(fake_event_sender)
	}
}

#[async_trait]
impl EventSenderTrait for FakeEventSender {
	async fn send_player_event(&self, payload: PlayerEventPayload) -> Result<(), ()> {
		self.payloads.lock().push(payload);
		Ok(())
	}
}
