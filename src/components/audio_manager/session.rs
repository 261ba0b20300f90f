//! The playback session: the one place allowed to decide what track is
//! active and where it sits in the queue.
//!
//! Everything here is pure state-machine logic. The browser audio element
//! never appears; its telemetry arrives as [`EngineEvent`] values and its
//! transport is driven by whoever owns the session (see `playback_api`).

use crate::api::models::Track;

/// Telemetry from the underlying audio resource, reduced into session state.
/// Each variant maps to exactly one transition in [`PlaybackSession::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The resource knows its total length.
    MetadataReady { duration: f64 },
    /// Playback position moved. Cadence is resource-determined.
    PositionTick { seconds: f64 },
    /// The current track finished.
    Ended,
    /// An asynchronous play attempt was refused (e.g. missing user gesture).
    /// Carries the generation the attempt was issued for; stale rejections
    /// must not clobber newer intent.
    PlayRejected { generation: u64 },
}

/// The single mutable playback state shared by every UI surface.
///
/// Invariants:
/// - `current` of `None` implies `playing == false` and `position == 0`.
/// - `current_index`, when set, is a valid index into `queue`; it normally
///   points at an element whose id matches `current`, except transiently
///   when a caller forced an index hint for a track absent from the queue.
/// - `duration` reads as `0.0` until the resource has reported metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    pub queue: Vec<Track>,
    pub current: Option<Track>,
    pub current_index: Option<usize>,
    pub playing: bool,
    pub position: f64,
    pub duration: f64,
    /// Bumped on every committed track/play intent. Play-attempt callbacks
    /// compare against this so only the latest request may mutate state.
    pub generation: u64,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self {
            queue: Vec::new(),
            current: None,
            current_index: None,
            playing: false,
            position: 0.0,
            duration: 0.0,
            generation: 0,
        }
    }
}

impl PlaybackSession {
    /// Commit a new now-playing track. This is the single transition point
    /// for loading a track; the engine reacts to the committed state.
    ///
    /// Index resolution: search the effective queue for the track's id,
    /// then fall back to an in-range `index_hint`, then prepend the track
    /// to the front of the queue at index 0.
    pub fn play_track(
        &mut self,
        track: Track,
        queue_override: Option<Vec<Track>>,
        index_hint: Option<usize>,
    ) {
        if let Some(new_queue) = queue_override {
            self.queue = new_queue;
        }

        let resolved = self
            .queue
            .iter()
            .position(|t| t.id == track.id)
            .or_else(|| index_hint.filter(|&hint| hint < self.queue.len()));

        let index = match resolved {
            Some(index) => index,
            None => {
                self.queue.insert(0, track.clone());
                0
            }
        };

        let source_changed = self
            .current
            .as_ref()
            .map(|t| t.url != track.url)
            .unwrap_or(true);
        if source_changed {
            self.position = 0.0;
            self.duration = 0.0;
        }

        self.current_index = Some(index);
        self.current = Some(track);
        self.playing = true;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Flip play/pause. With an empty now-playing slot and a non-empty
    /// queue, this starts the queue at `current_index` (or its head).
    pub fn toggle_play_pause(&mut self) {
        if self.current.is_none() {
            if self.queue.is_empty() {
                return;
            }
            let index = self
                .current_index
                .unwrap_or(0)
                .min(self.queue.len() - 1);
            let track = self.queue[index].clone();
            self.play_track(track, None, Some(index));
        } else {
            self.playing = !self.playing;
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Advance to the adjacent queue entry. A missing adjacent index is a
    /// no-op. An untracked index counts as "before the queue", so `next`
    /// from untracked starts at the head.
    pub fn next_track(&mut self) {
        let next = self.current_index.map_or(0, |i| i + 1);
        if let Some(track) = self.queue.get(next).cloned() {
            self.play_track(track, None, Some(next));
        }
    }

    pub fn prev_track(&mut self) {
        let Some(index) = self.current_index else {
            return;
        };
        if index == 0 {
            return;
        }
        if let Some(track) = self.queue.get(index - 1).cloned() {
            self.play_track(track, None, Some(index - 1));
        }
    }

    /// Replace the queue wholesale. An empty queue can never have an active
    /// track, so it clears the whole session.
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        self.queue = tracks;
        if self.queue.is_empty() {
            self.current = None;
            self.current_index = None;
            self.playing = false;
            self.position = 0.0;
            self.duration = 0.0;
        }
    }

    /// Reposition playback. Only takes effect once the resource has
    /// reported a finite duration; before that a seek is silently ignored.
    /// Returns whether the seek applied so the caller knows to move the
    /// actual resource.
    pub fn seek_to(&mut self, seconds: f64) -> bool {
        if self.duration.is_finite() && self.duration > 0.0 {
            self.position = seconds.clamp(0.0, self.duration);
            true
        } else {
            false
        }
    }

    /// Reduce one engine event into state.
    pub fn apply(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::MetadataReady { duration } => {
                if self.current.is_some() && duration.is_finite() {
                    self.duration = duration.max(0.0);
                }
            }
            EngineEvent::PositionTick { seconds } => {
                if self.current.is_some() {
                    self.position = seconds.max(0.0);
                }
            }
            EngineEvent::Ended => {
                let next = self.current_index.map_or(0, |i| i + 1);
                if let Some(track) = self.queue.get(next).cloned() {
                    self.play_track(track, None, Some(next));
                } else {
                    // End of queue: pause in place rather than clearing the
                    // track, so next/prev boundary behavior stays intact.
                    self.playing = false;
                    self.position = 0.0;
                }
            }
            EngineEvent::PlayRejected { generation } => {
                if generation == self.generation {
                    self.playing = false;
                }
            }
        }
    }
}
