//! Web playback engine: owns the single `<audio>` element, translates
//! committed session intent into element operations, and polls element
//! telemetry back into the session.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
use crate::components::audio_manager::playback_api::PlayerController;
use crate::components::audio_manager::playback_api::use_player;
#[cfg(target_arch = "wasm32")]
use crate::components::audio_manager::session::EngineEvent;

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub(crate) fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id("onlyvibes-audio") {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id("onlyvibes-audio");
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
pub(crate) fn get_or_create_audio_element() -> Option<()> {
    None
}

/// Move the resource's playhead. Guarded: a seek while the element has no
/// finite duration yet is dropped on the floor.
#[cfg(target_arch = "wasm32")]
pub(crate) fn set_media_position(seconds: f64) {
    if let Some(audio) = get_or_create_audio_element() {
        if audio.duration().is_finite() {
            audio.set_current_time(seconds.max(0.0));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn set_media_position(_seconds: f64) {}

/// Start the element and watch the returned promise. A rejection (commonly
/// a missing user gesture) is logged and fed back so intent degrades to
/// paused instead of drifting from the element's real state.
#[cfg(target_arch = "wasm32")]
fn try_play(audio: &HtmlAudioElement, player: PlayerController, generation: u64) {
    match audio.play() {
        Ok(promise) => {
            spawn(async move {
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    web_sys::console::error_1(&err);
                    player.report_play_failure(generation, play_failure_message(&err));
                }
            });
        }
        Err(err) => {
            web_sys::console::error_1(&err);
            player.report_play_failure(generation, play_failure_message(&err));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn play_failure_message(err: &wasm_bindgen::JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|value| value.as_string())
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| "The browser refused to start playback. Press play to retry.".into())
}

/// Render-nothing component that keeps the audio element in sync with the
/// session. Mounted once by `AppShell`.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let player = use_player();
    let mut last_src = use_signal(|| None::<String>);

    // Apply committed track + play intent to the element. Re-runs on every
    // session write, so each branch must be idempotent.
    use_effect(move || {
        let track = player.current_track();
        let playing = player.is_playing();
        let generation = player.generation();
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };

        match track {
            Some(track) => {
                if last_src.peek().as_deref() != Some(track.url.as_str()) {
                    last_src.set(Some(track.url.clone()));
                    audio.set_src(&track.url);
                    audio.load();
                }
                if playing {
                    if audio.paused() {
                        try_play(&audio, player, generation);
                    }
                } else if !audio.paused() {
                    let _ = audio.pause();
                }
            }
            None => {
                let _ = audio.pause();
                audio.set_src("");
                let _ = audio.remove_attribute("src");
                audio.load();
                if last_src.peek().is_some() {
                    last_src.set(None);
                }
            }
        }
    });

    // Volume changes.
    use_effect(move || {
        let volume = player.volume().clamp(0.0, 1.0);
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(volume);
        }
    });

    // Telemetry poll: position ticks, metadata, and end-of-media. The
    // element has no fixed tick cadence we can rely on, so poll it.
    use_effect(move || {
        let session = player.session();
        spawn(async move {
            let mut ended_for: Option<String> = None;

            loop {
                gloo_timers::future::TimeoutFuture::new(200).await;

                let Some(audio) = get_or_create_audio_element() else {
                    continue;
                };

                let (current_id, known_position, known_duration) = {
                    let snapshot = session.peek();
                    (
                        snapshot.current.as_ref().map(|t| t.id.clone()),
                        snapshot.position,
                        snapshot.duration,
                    )
                };

                if current_id.is_none() {
                    ended_for = None;
                    continue;
                }

                let duration = audio.duration();
                if duration.is_finite() && (duration - known_duration).abs() > 0.5 {
                    player.engine_event(EngineEvent::MetadataReady { duration });
                }

                let time = audio.current_time();
                if !audio.ended() && (time - known_position).abs() >= 0.2 {
                    player.engine_event(EngineEvent::PositionTick { seconds: time });
                }

                if !audio.paused() {
                    player.clear_playback_error();
                }

                if audio.ended() {
                    if ended_for != current_id {
                        ended_for = current_id;
                        player.engine_event(EngineEvent::Ended);
                    }
                } else {
                    ended_for = None;
                }
            }
        });
    });

    rsx! {}
}

#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    // No audio backend off the web target; the session still works so the
    // UI renders, it just never produces sound.
    let _player = use_player();
    rsx! {}
}
