use dioxus::prelude::*;

use crate::api::catalog::catalog_tracks;
use crate::components::audio_manager::use_player;
use crate::components::{use_auth, AppView, Icon};

/// Catalog browser. Each card hands the facade the clicked track together
/// with the full list it came from, so next/prev walk this grid's order.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let player = use_player();

    if auth.is_loading() {
        return rsx! {
            main { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center;",
                p { class: "text-muted", "Loading…" }
            }
        };
    }

    let Some(user) = auth.current_user() else {
        return rsx! {
            main { style: "min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center;",
                h1 { style: "font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem;",
                    "You must be logged in to see the dashboard"
                }
                Link { class: "link", to: AppView::Login {}, "Go to Login" }
            }
        };
    };

    let tracks = catalog_tracks();
    let now_playing_id = player.current_track().map(|t| t.id);

    rsx! {
        main {
            h1 { style: "font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem;",
                "Welcome back, {user.email}"
            }

            section { class: "card-grid",
                for (index , track) in tracks.iter().enumerate() {
                    div { class: "card", key: "{track.id}",
                        div { style: "display: flex; align-items: center; gap: 0.5rem;",
                            if now_playing_id.as_deref() == Some(track.id.as_str()) {
                                Icon { name: "music".to_string(), class: "w-4 h-4".to_string() }
                            }
                            div { style: "font-size: 1.125rem; font-weight: 600;", "{track.title}" }
                        }
                        div { class: "text-muted", style: "font-size: 0.875rem;", "{track.artist}" }
                        button {
                            class: "btn-primary",
                            style: "margin-top: 0.5rem; font-size: 0.875rem;",
                            onclick: {
                                let track = track.clone();
                                move |_| {
                                    player.play_track(
                                        track.clone(),
                                        Some(catalog_tracks().to_vec()),
                                        Some(index),
                                    );
                                }
                            },
                            "Play"
                        }
                    }
                }
            }
        }
    }
}
