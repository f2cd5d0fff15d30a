use parking_lot::Mutex;
use std::time::Duration;

/// Delay before the progress bar becomes visible, so quick navigations don't flash it.
const PROGRESS_BAR_DELAY: Duration = Duration::from_millis(300);

/// The chat container next to the player.
pub trait ChatPanel {
	/// Scroll the chat container to its maximum scroll offset.
	fn scroll_to_bottom(&self);
}

/// A page-wide progress bar shown during navigation.
pub trait ProgressIndicator {
	fn show(&self, delay: Duration);
	fn hide(&self);
}

/// Translates the host framework's navigation-start/stop signals into progress bar
/// visibility. Repeated signals of the same kind are collapsed.
pub struct PageLoadProgress<Indicator> {
	indicator: Indicator,
	delay: Duration,
	showing: Mutex<bool>,
}

impl<Indicator: ProgressIndicator> PageLoadProgress<Indicator> {
	pub fn new(indicator: Indicator) -> Self {
		Self::with_delay(indicator, PROGRESS_BAR_DELAY)
	}

	pub fn with_delay(indicator: Indicator, delay: Duration) -> Self {
		Self {
			indicator,
			delay,
			showing: Mutex::new(false),
		}
	}

	pub fn handle_navigation_start(&self) {
		let mut showing = self.showing.lock();
		if !*showing {
			self.indicator.show(self.delay);
			*showing = true;
		}
	}

	pub fn handle_navigation_stop(&self) {
		let mut showing = self.showing.lock();
		if *showing {
			self.indicator.hide();
			*showing = false;
		}
	}
}
