use crate::message::server_event::ServerEvent;
use async_trait::async_trait;
use futures_util::{Stream, StreamExt};
use std::pin::Pin;
use tracing::debug;

pub type EventReceiver = Pin<Box<dyn EventReceiverTrait + Unpin + Send>>;

#[async_trait]
pub trait EventReceiverTrait {
	/// Receive the next event from the server or None once the channel has closed.
	async fn receive(&mut self) -> Option<ServerEvent>;
}

pub struct StreamEventReceiver<EventStream> {
	event_stream: EventStream,
}

#[async_trait]
impl<EventStream> EventReceiverTrait for StreamEventReceiver<EventStream>
where
	EventStream: Stream<Item = String> + Unpin + Send,
{
	async fn receive(&mut self) -> Option<ServerEvent> {
		loop {
			let text_frame = self.event_stream.next().await?;

			match ServerEvent::try_from(text_frame.as_str()) {
				Ok(event) => return Some(event),
				Err(error) => {
					// Malformed frames are dropped, a later sync self-corrects.
					debug!("Ignoring malformed server event: {error}");
				}
			}
		}
	}
}

impl<EventStream> StreamEventReceiver<EventStream>
where
	EventStream: Stream<Item = String>,
{
	pub fn new(event_stream: EventStream) -> Self {
		Self { event_stream }
	}
}

impl<EventStream> From<StreamEventReceiver<EventStream>> for EventReceiver
where
	EventStream: Stream<Item = String> + Unpin + Send + 'static,
{
	fn from(stream_event_receiver: StreamEventReceiver<EventStream>) -> Self {
		Box::pin(stream_event_receiver)
	}
}
