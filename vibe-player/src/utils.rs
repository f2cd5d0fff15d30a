#[cfg(test)]
pub mod fake_event_sender;
#[cfg(test)]
pub mod fake_player;
#[cfg(test)]
pub mod fake_sdk;
pub mod wall_clock;
