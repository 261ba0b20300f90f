use super::session::{EngineEvent, PlaybackSession};
use crate::api::models::Track;

fn track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        title: format!("Track {id}"),
        artist: "Test Artist".to_string(),
        url: format!("https://cdn.example/{id}.mp3"),
        artwork: None,
    }
}

fn abc() -> Vec<Track> {
    vec![track("a"), track("b"), track("c")]
}

#[test]
fn play_track_in_queue_resolves_matching_index() {
    let mut session = PlaybackSession::default();
    session.play_track(track("b"), Some(abc()), None);

    assert_eq!(session.current_index, Some(1));
    assert_eq!(session.current.as_ref().unwrap().id, "b");
    assert!(session.playing);
}

#[test]
fn play_track_missing_from_queue_prepends_at_front() {
    let mut session = PlaybackSession::default();
    session.play_track(track("x"), Some(abc()), None);

    assert_eq!(session.queue.len(), 4);
    assert_eq!(session.queue[0].id, "x");
    assert_eq!(session.current_index, Some(0));
    assert_eq!(session.current.as_ref().unwrap().id, "x");
}

#[test]
fn play_track_missing_uses_in_range_index_hint() {
    let mut session = PlaybackSession::default();
    session.play_track(track("x"), Some(abc()), Some(2));

    // Hint wins over the prepend fallback; the queue is left untouched.
    assert_eq!(session.queue.len(), 3);
    assert_eq!(session.current_index, Some(2));
    assert_eq!(session.current.as_ref().unwrap().id, "x");
}

#[test]
fn play_track_out_of_range_hint_falls_back_to_prepend() {
    let mut session = PlaybackSession::default();
    session.play_track(track("x"), Some(abc()), Some(9));

    assert_eq!(session.queue[0].id, "x");
    assert_eq!(session.current_index, Some(0));
}

#[test]
fn set_queue_keeps_current_track_when_non_empty() {
    let mut session = PlaybackSession::default();
    session.play_track(track("b"), Some(abc()), None);
    session.set_queue(vec![track("d"), track("e")]);

    assert_eq!(session.current.as_ref().unwrap().id, "b");
    assert!(session.playing);
}

#[test]
fn set_queue_empty_clears_session() {
    let mut session = PlaybackSession::default();
    session.play_track(track("b"), Some(abc()), None);
    session.set_queue(Vec::new());

    assert_eq!(session.current, None);
    assert_eq!(session.current_index, None);
    assert!(!session.playing);
    assert_eq!(session.position, 0.0);
}

#[test]
fn next_at_last_index_is_noop() {
    let mut session = PlaybackSession::default();
    session.play_track(track("c"), Some(abc()), None);
    let before = session.clone();

    session.next_track();

    assert_eq!(session.current, before.current);
    assert_eq!(session.current_index, before.current_index);
    assert_eq!(session.playing, before.playing);
}

#[test]
fn prev_at_first_index_is_noop() {
    let mut session = PlaybackSession::default();
    session.play_track(track("a"), Some(abc()), None);
    let before = session.clone();

    session.prev_track();

    assert_eq!(session.current, before.current);
    assert_eq!(session.current_index, before.current_index);
}

#[test]
fn next_from_untracked_index_starts_at_queue_head() {
    let mut session = PlaybackSession::default();
    session.set_queue(abc());

    session.next_track();

    assert_eq!(session.current_index, Some(0));
    assert_eq!(session.current.as_ref().unwrap().id, "a");
}

#[test]
fn toggle_with_empty_slot_starts_queue_head() {
    let mut session = PlaybackSession::default();
    session.set_queue(abc());

    session.toggle_play_pause();

    assert_eq!(session.current.as_ref().unwrap().id, "a");
    assert_eq!(session.current_index, Some(0));
    assert!(session.playing);
}

#[test]
fn toggle_with_empty_queue_is_noop() {
    let mut session = PlaybackSession::default();
    session.toggle_play_pause();

    assert_eq!(session.current, None);
    assert!(!session.playing);
}

#[test]
fn toggle_flips_play_state() {
    let mut session = PlaybackSession::default();
    session.play_track(track("a"), Some(abc()), None);

    session.toggle_play_pause();
    assert!(!session.playing);
    session.toggle_play_pause();
    assert!(session.playing);
}

#[test]
fn ended_mid_queue_auto_advances() {
    let mut session = PlaybackSession::default();
    session.play_track(track("a"), Some(abc()), None);

    session.apply(EngineEvent::Ended);

    assert_eq!(session.current.as_ref().unwrap().id, "b");
    assert_eq!(session.current_index, Some(1));
    assert!(session.playing);
}

#[test]
fn ended_on_last_track_pauses_in_place() {
    let mut session = PlaybackSession::default();
    session.play_track(track("c"), Some(abc()), None);
    session.apply(EngineEvent::PositionTick { seconds: 180.0 });

    session.apply(EngineEvent::Ended);

    assert!(!session.playing);
    assert_eq!(session.position, 0.0);
    assert_eq!(session.current_index, Some(2));
    assert_eq!(session.current.as_ref().unwrap().id, "c");
}

#[test]
fn seek_ignored_while_duration_unknown() {
    let mut session = PlaybackSession::default();
    session.play_track(track("a"), Some(abc()), None);

    assert!(!session.seek_to(5.0));
    assert_eq!(session.position, 0.0);
}

#[test]
fn seek_applies_once_duration_known() {
    let mut session = PlaybackSession::default();
    session.play_track(track("a"), Some(abc()), None);
    session.apply(EngineEvent::MetadataReady { duration: 240.0 });

    assert!(session.seek_to(5.0));
    assert_eq!(session.position, 5.0);
}

#[test]
fn seek_clamps_to_duration() {
    let mut session = PlaybackSession::default();
    session.play_track(track("a"), Some(abc()), None);
    session.apply(EngineEvent::MetadataReady { duration: 240.0 });

    assert!(session.seek_to(999.0));
    assert_eq!(session.position, 240.0);
}

#[test]
fn metadata_and_ticks_update_timing() {
    let mut session = PlaybackSession::default();
    session.play_track(track("a"), Some(abc()), None);

    session.apply(EngineEvent::MetadataReady { duration: 187.3 });
    session.apply(EngineEvent::PositionTick { seconds: 12.8 });

    assert_eq!(session.duration, 187.3);
    assert_eq!(session.position, 12.8);
}

#[test]
fn telemetry_without_current_track_is_dropped() {
    let mut session = PlaybackSession::default();
    session.apply(EngineEvent::MetadataReady { duration: 100.0 });
    session.apply(EngineEvent::PositionTick { seconds: 10.0 });

    assert_eq!(session.duration, 0.0);
    assert_eq!(session.position, 0.0);
}

#[test]
fn stale_play_rejection_is_ignored() {
    let mut session = PlaybackSession::default();
    session.play_track(track("a"), Some(abc()), None);
    let stale = session.generation;
    session.play_track(track("b"), None, None);

    session.apply(EngineEvent::PlayRejected { generation: stale });

    // The newer request's intent wins.
    assert!(session.playing);
    assert_eq!(session.current.as_ref().unwrap().id, "b");
}

#[test]
fn current_play_rejection_forces_pause() {
    let mut session = PlaybackSession::default();
    session.play_track(track("a"), Some(abc()), None);

    session.apply(EngineEvent::PlayRejected {
        generation: session.generation,
    });

    assert!(!session.playing);
    assert_eq!(session.current.as_ref().unwrap().id, "a");
}

#[test]
fn switching_tracks_resets_timing() {
    let mut session = PlaybackSession::default();
    session.play_track(track("a"), Some(abc()), None);
    session.apply(EngineEvent::MetadataReady { duration: 240.0 });
    session.apply(EngineEvent::PositionTick { seconds: 30.0 });

    session.play_track(track("b"), None, None);

    assert_eq!(session.position, 0.0);
    assert_eq!(session.duration, 0.0);
}

#[test]
fn scenario_three_track_walkthrough() {
    let mut session = PlaybackSession::default();
    session.set_queue(abc());

    session.play_track(track("b"), Some(abc()), Some(1));
    assert_eq!(session.current_index, Some(1));
    assert_eq!(session.current.as_ref().unwrap().id, "b");

    session.next_track();
    assert_eq!(session.current_index, Some(2));
    assert_eq!(session.current.as_ref().unwrap().id, "c");

    session.next_track();
    assert_eq!(session.current_index, Some(2));
    assert_eq!(session.current.as_ref().unwrap().id, "c");
}
