//! Audio Manager - owns the single playback session and the audio element
//! behind it, outside of the component render cycle.
//!
//! Split three ways: `session` is the pure queue/transport state machine,
//! `playback_api` is the shared facade UI surfaces consume, and
//! `controller_web` wraps the actual browser audio resource.

mod controller_web;
mod playback_api;
mod session;

#[cfg(test)]
mod tests;

pub use controller_web::AudioController;
pub use playback_api::{use_player, PlayerController};
pub use session::{EngineEvent, PlaybackSession};
