//! Public playback facade consumed by UI components.
//!
//! Exactly one `PlayerController` exists per running app; `AppShell` creates
//! it and provides it through context. Any number of components may read
//! from it and issue transport commands without coordinating with each
//! other: every mutation commits inside a single signal write, so readers
//! never observe a half-updated track/index/playing combination.

use dioxus::prelude::*;

use crate::api::models::Track;
use crate::components::audio_manager::controller_web::set_media_position;
use crate::components::audio_manager::session::{EngineEvent, PlaybackSession};

#[derive(Clone, Copy)]
pub struct PlayerController {
    session: Signal<PlaybackSession>,
    volume: Signal<f64>,
    playback_error: Signal<Option<String>>,
}

impl PlayerController {
    pub fn new(
        session: Signal<PlaybackSession>,
        volume: Signal<f64>,
        playback_error: Signal<Option<String>>,
    ) -> Self {
        Self {
            session,
            volume,
            playback_error,
        }
    }

    pub fn current_track(&self) -> Option<Track> {
        self.session.read().current.clone()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.read().current_index
    }

    pub fn is_playing(&self) -> bool {
        self.session.read().playing
    }

    pub fn position(&self) -> f64 {
        self.session.read().position
    }

    pub fn duration(&self) -> f64 {
        self.session.read().duration
    }

    pub fn queue(&self) -> Vec<Track> {
        self.session.read().queue.clone()
    }

    pub fn volume(&self) -> f64 {
        *self.volume.read()
    }

    pub fn playback_error(&self) -> Option<String> {
        self.playback_error.read().clone()
    }

    /// Commit a new now-playing track, optionally replacing the queue.
    pub fn play_track(
        &self,
        track: Track,
        queue_override: Option<Vec<Track>>,
        index_hint: Option<usize>,
    ) {
        let mut playback_error = self.playback_error;
        if playback_error.peek().is_some() {
            playback_error.set(None);
        }
        let mut session = self.session;
        session.write().play_track(track, queue_override, index_hint);
    }

    pub fn toggle_play_pause(&self) {
        let mut session = self.session;
        session.write().toggle_play_pause();
    }

    pub fn next_track(&self) {
        let mut session = self.session;
        session.write().next_track();
    }

    pub fn prev_track(&self) {
        let mut session = self.session;
        session.write().prev_track();
    }

    pub fn set_queue(&self, tracks: Vec<Track>) {
        let mut session = self.session;
        session.write().set_queue(tracks);
    }

    /// Reposition playback. Ignored while the resource's duration is still
    /// unknown; callers must tolerate the no-op.
    pub fn seek_to(&self, seconds: f64) {
        let mut session = self.session;
        let applied = session.write().seek_to(seconds);
        if applied {
            set_media_position(seconds);
        }
    }

    pub fn set_volume(&self, volume: f64) {
        let mut signal = self.volume;
        signal.set(volume.clamp(0.0, 1.0));
    }

    // --- engine-facing surface -------------------------------------------

    pub(crate) fn session(&self) -> Signal<PlaybackSession> {
        self.session
    }

    pub(crate) fn generation(&self) -> u64 {
        self.session.read().generation
    }

    pub(crate) fn engine_event(&self, event: EngineEvent) {
        let mut session = self.session;
        session.write().apply(event);
    }

    /// A play attempt was refused by the resource. Degrades to a paused
    /// state (no automatic retry) and surfaces the message, unless a newer
    /// request has superseded the attempt.
    pub(crate) fn report_play_failure(&self, generation: u64, message: String) {
        if self.session.peek().generation != generation {
            return;
        }
        self.engine_event(EngineEvent::PlayRejected { generation });
        let mut playback_error = self.playback_error;
        playback_error.set(Some(message));
    }

    pub(crate) fn clear_playback_error(&self) {
        let mut playback_error = self.playback_error;
        if playback_error.peek().is_some() {
            playback_error.set(None);
        }
    }
}

/// Read the shared playback facade from context. Panics with a wiring
/// message when no session has been initialized, so a misplaced consumer
/// fails during development instead of rendering broken UI.
pub fn use_player() -> PlayerController {
    use_hook(|| {
        try_consume_context::<PlayerController>().expect(
            "no playback session in context: mount this component under AppShell",
        )
    })
}
