use dioxus::prelude::*;

use crate::components::audio_manager::use_player;
use crate::components::Icon;

#[component]
pub(super) fn PrevButton() -> Element {
    let player = use_player();
    let can_step = player.current_index().map(|i| i > 0).unwrap_or(false);

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "transport-btn",
            aria_label: "Previous",
            disabled: !can_step,
            onclick: move |_| player.prev_track(),
            Icon { name: "skip-back".to_string(), class: "w-6 h-6".to_string() }
        }
    }
}

#[component]
pub(super) fn PlayPauseButton() -> Element {
    let player = use_player();
    let is_playing = player.is_playing();
    let idle = player.current_track().is_none() && player.queue().is_empty();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "play-pause-btn",
            aria_label: if is_playing { "Pause" } else { "Play" },
            disabled: idle,
            onclick: move |_| player.toggle_play_pause(),
            Icon {
                name: if is_playing { "pause".to_string() } else { "play".to_string() },
                class: "w-6 h-6".to_string(),
            }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let player = use_player();
    let queue_len = player.queue().len();
    let next = player.current_index().map_or(0, |i| i + 1);
    let can_step = next < queue_len;

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "transport-btn",
            aria_label: "Next",
            disabled: !can_step,
            onclick: move |_| player.next_track(),
            Icon { name: "skip-forward".to_string(), class: "w-6 h-6".to_string() }
        }
    }
}
