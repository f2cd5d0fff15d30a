use crate::configuration::ConfigurationError;
use crate::player::sdk::SdkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VibeError {
	#[error("Failed to load configuration: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("Failed to load the player SDK: {0}")]
	Sdk(#[from] SdkError),
}
