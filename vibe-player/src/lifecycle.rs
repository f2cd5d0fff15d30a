use crate::connection::receiver::EventReceiver;
use crate::message::server_event::ServerEvent;
use crate::player::controller::PlayerController;
use crate::ui::ChatPanel;
use tracing::info;

/// Drives one player component: triggers player construction, routes inbound server
/// events until the channel closes, then tears the player down.
pub async fn run_player(
	mut controller: PlayerController,
	chat_panel: &dyn ChatPanel,
	mut event_receiver: EventReceiver,
) {
	controller.ensure_player().await;

	while let Some(event) = event_receiver.receive().await {
		match event {
			ServerEvent::PlayerLoad(payload) => controller.handle_load_event(payload).await,
			ServerEvent::PlayerSync(payload) => controller.handle_sync_event(payload).await,
			ServerEvent::ScrollChat => chat_panel.scroll_to_bottom(),
		}
	}

	info!("Server event channel closed, tearing down the player.");
	controller.teardown();
}
