use chrono::Utc;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Millisecond wall clock used to stamp outgoing snapshots and age incoming ones.
/// The test variant is a shared counter that is advanced manually, so drift
/// computations are deterministic.
#[derive(Clone, Default)]
pub struct WallClock {
	test_time: Option<Arc<AtomicI64>>,
}

impl WallClock {
	#[must_use]
	pub fn test() -> Self {
		Self {
			test_time: Some(Arc::default()),
		}
	}

	#[must_use]
	pub fn now_milliseconds(&self) -> i64 {
		match &self.test_time {
			None => Utc::now().timestamp_millis(),
			Some(test_time) => test_time.load(Ordering::SeqCst),
		}
	}

	pub fn set_milliseconds(&self, milliseconds: i64) {
		self.test_time
			.as_ref()
			.expect("Can only be called in test mode.")
			.store(milliseconds, Ordering::SeqCst);
	}

	pub fn advance_milliseconds(&self, milliseconds: i64) {
		self.test_time
			.as_ref()
			.expect("Can only be called in test mode.")
			.fetch_add(milliseconds, Ordering::SeqCst);
	}
}
