use crate::message::client_event::{ClientEvent, PlayerEventPayload};
use async_trait::async_trait;
use futures_util::{Sink, SinkExt};
use std::fmt::Debug;
use std::pin::Pin;
use std::sync::Arc;
use tracing::error;

pub type EventSender = Pin<Arc<dyn EventSenderTrait + Send + Sync>>;

#[async_trait]
pub trait EventSenderTrait {
	async fn send_player_event(&self, payload: PlayerEventPayload) -> Result<(), ()>;
}

/// Pushes client events as JSON text frames into the real-time channel's sink.
pub struct SinkEventSender<EventSink> {
	inner: tokio::sync::Mutex<SinkEventSenderInner<EventSink>>,
}

struct SinkEventSenderInner<EventSink> {
	event_sink: EventSink,
}

#[async_trait]
impl<EventSink, SinkError> EventSenderTrait for SinkEventSender<EventSink>
where
	EventSink: Sink<String, Error = SinkError> + Send + Unpin + 'static,
	SinkError: Debug + 'static,
{
	async fn send_player_event(&self, payload: PlayerEventPayload) -> Result<(), ()> {
		self.send_event(&ClientEvent::from(payload)).await
	}
}

impl<EventSink, SinkError> SinkEventSender<EventSink>
where
	EventSink: Sink<String, Error = SinkError> + Unpin,
	SinkError: Debug + 'static,
{
	pub fn new(event_sink: EventSink) -> Self {
		let inner = SinkEventSenderInner { event_sink };
		Self { inner: inner.into() }
	}

	async fn send_event(&self, event: &ClientEvent) -> Result<(), ()> {
		let mut inner = self.inner.lock().await;

		let text_frame = String::from(event);

		inner
			.event_sink
			.send(text_frame)
			.await
			.map_err(|error| error!("Error while sending event: {:?}", error))
	}
}

impl<EventSink, SinkError> From<SinkEventSender<EventSink>> for EventSender
where
	EventSink: Sink<String, Error = SinkError> + Send + Unpin + 'static,
	SinkError: Debug + 'static,
{
	fn from(sink_event_sender: SinkEventSender<EventSink>) -> Self {
		Arc::pin(sink_event_sender)
	}
}
