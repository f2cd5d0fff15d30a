pub mod configuration;
pub mod connection;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod message;
pub mod playback;
pub mod player;
pub mod ui;
pub mod utils;
