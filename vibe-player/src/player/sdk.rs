use crate::player::{PlayerApi, PlayerConfiguration};
use async_trait::async_trait;
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
	#[error("The player SDK could not be loaded: {0}")]
	Unavailable(String),
	#[error("Failed to construct a player: {0}")]
	PlayerConstruction(String),
}

/// Performs the one-time SDK bootstrap, e.g. script injection in a browser host.
#[async_trait]
pub trait SdkProvider: Send + Sync {
	async fn load(&self) -> Result<Arc<dyn PlayerSdk>, SdkError>;
}

/// The loaded third-party player SDK. `create_player` resolves once the constructed
/// player instance has signalled readiness.
#[async_trait]
pub trait PlayerSdk: Send + Sync {
	async fn create_player(&self, configuration: &PlayerConfiguration) -> Result<Box<dyn PlayerApi>, SdkError>;
}

/// One-time-initialization holder for the SDK. The SDK persists for the lifetime of
/// the process, so there is no teardown.
#[derive(Default)]
pub struct SharedSdk {
	sdk: OnceCell<Result<Arc<dyn PlayerSdk>, SdkError>>,
}

impl SharedSdk {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads the SDK at most once. Every caller is satisfied by the same load,
	/// including late arrivals after it has already finished. A failed load is
	/// logged once and memoized as well, leaving the player feature permanently
	/// degraded without retries.
	pub async fn get_or_load(&self, provider: &dyn SdkProvider) -> Result<Arc<dyn PlayerSdk>, SdkError> {
		self.sdk
			.get_or_init(|| async {
				provider
					.load()
					.await
					.inspect_err(|error| error!("Failed to load the player SDK: {error}"))
			})
			.await
			.clone()
	}

	/// The process-wide SDK holder shared by all player components.
	#[must_use]
	pub fn global() -> Arc<SharedSdk> {
		static GLOBAL_SDK: OnceLock<Arc<SharedSdk>> = OnceLock::new();
		GLOBAL_SDK.get_or_init(Arc::default).clone()
	}
}
