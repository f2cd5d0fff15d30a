use crate::player::sdk::{PlayerSdk, SdkError, SdkProvider};
use crate::player::{PlayerApi, PlayerConfiguration};
use crate::utils::fake_player::FakePlayer;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Provider double that always resolves to the same [`FakeSdk`] and counts loads.
pub struct FakeSdkProvider {
	sdk: Arc<FakeSdk>,
	load_count: AtomicUsize,
}

impl FakeSdkProvider {
	#[must_use]
	pub fn new(player: FakePlayer) -> Self {
		Self {
			sdk: Arc::new(FakeSdk::new(player)),
			load_count: AtomicUsize::new(0),
		}
	}

	#[must_use]
	pub fn sdk(&self) -> Arc<FakeSdk> {
		self.sdk.clone()
	}

	#[must_use]
	pub fn load_count(&self) -> usize {
		self.load_count.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl SdkProvider for FakeSdkProvider {
	async fn load(&self) -> Result<Arc<dyn PlayerSdk>, SdkError> {
		self.load_count.fetch_add(1, Ordering::SeqCst);
		Ok(self.sdk.clone())
	}
}

/// SDK double handing out clones of a shared [`FakePlayer`]. Player construction can
/// be toggled off to simulate an environment where readiness never arrives.
pub struct FakeSdk {
	player: FakePlayer,
	available: AtomicBool,
}

impl FakeSdk {
	#[must_use]
	pub fn new(player: FakePlayer) -> Self {
		Self {
			player,
			available: AtomicBool::new(true),
		}
	}

	pub fn set_available(&self, available: bool) {
		self.available.store(available, Ordering::SeqCst);
	}
}

#[async_trait]
impl PlayerSdk for FakeSdk {
	async fn create_player(&self, _configuration: &PlayerConfiguration) -> Result<Box<dyn PlayerApi>, SdkError> {
		if !self.available.load(Ordering::SeqCst) {
			return Err(SdkError::PlayerConstruction("player never became ready".to_string()));
		}
		Ok(Box::new(self.player.clone()))
	}
}
