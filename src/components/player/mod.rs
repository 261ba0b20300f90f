use dioxus::prelude::*;

use crate::api::models::format_duration;
use crate::components::audio_manager::use_player;
use crate::components::Icon;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton};

/// Persistent bottom player bar. Pure view glue over the playback facade:
/// it renders whatever the session says and issues transport commands.
#[component]
pub fn Player() -> Element {
    let player = use_player();

    let current_track = player.current_track();
    let position = player.position();
    let duration = player.duration();
    let playback_error = player.playback_error();

    let on_seek = move |e: Event<FormData>| {
        if let Ok(percent) = e.value().parse::<f64>() {
            let percent = percent.clamp(0.0, 100.0);
            if duration > 0.0 {
                player.seek_to(percent / 100.0 * duration);
            }
        }
    };

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(value) = e.value().parse::<f64>() {
            player.set_volume(value / 100.0);
        }
    };

    let progress_percent = if duration > 0.0 {
        (position / duration * 100.0).round() as i32
    } else {
        0
    };

    rsx! {
        if let Some(message) = playback_error {
            div { class: "playback-error",
                div { "{message}" }
            }
        }
        div { class: "player-shell",
            // Album art
            match current_track.as_ref().and_then(|t| t.artwork.clone()) {
                Some(artwork) => rsx! {
                    img {
                        class: "player-art",
                        src: "{artwork}",
                        alt: "Album art",
                        loading: "lazy",
                    }
                },
                None => rsx! {
                    div { class: "player-art",
                        Icon { name: "music".to_string(), class: "w-6 h-6".to_string() }
                    }
                },
            }

            // Track info
            div { class: "player-info",
                match &current_track {
                    Some(track) => rsx! {
                        span { style: "font-weight: 600;", "{track.title}" }
                        span { class: "text-muted", style: "font-size: 0.875rem;", "{track.artist}" }
                    },
                    None => rsx! {
                        span { class: "text-muted", "No track playing" }
                        span { class: "text-muted", style: "font-size: 0.875rem;", "Select a song to start" }
                    },
                }
            }

            // Controls
            PrevButton {}
            PlayPauseButton {}
            NextButton {}

            // Progress bar
            div { class: "progress-row",
                span { class: "time-label", style: "text-align: right;",
                    {format_duration(position.max(0.0) as u32)}
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    disabled: duration <= 0.0,
                    value: progress_percent,
                    oninput: on_seek,
                }
                span { class: "time-label",
                    {
                        if duration > 0.0 {
                            format_duration(duration as u32)
                        } else {
                            "--:--".to_string()
                        }
                    }
                }
            }

            // Volume
            div { class: "volume-row",
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: (player.volume() * 100.0).round() as i32,
                    oninput: on_volume_change,
                }
            }
        }
    }
}
