use dioxus::prelude::*;

use crate::components::{use_auth, AppView, Icon};

const FEATURED_PLAYLISTS: [&str; 4] = [
    "Morning Vibes",
    "Workout Beats",
    "Relax & Focus",
    "Party Time",
];

#[component]
pub fn Home() -> Element {
    let auth = use_auth();

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

    let display_name = user
        .email
        .split('@')
        .next()
        .unwrap_or(user.email.as_str())
        .to_string();

    rsx! {
        main {
            header { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem;",
                h1 { style: "font-size: 1.875rem; font-weight: 700;", "Hello, {display_name}!" }
                button {
                    class: "text-danger",
                    style: "display: flex; align-items: center; gap: 0.5rem; text-decoration: underline;",
                    onclick: move |_| auth.sign_out(),
                    Icon { name: "logout".to_string(), class: "w-4 h-4".to_string() }
                    "Sign Out"
                }
            }

            section {
                h2 { style: "font-size: 1.5rem; font-weight: 600; margin-bottom: 1.5rem;",
                    "Your Playlists & Mixes"
                }
                div { class: "card-grid",
                    for playlist in FEATURED_PLAYLISTS {
                        div { class: "card", key: "{playlist}",
                            h3 { style: "font-size: 1.125rem; font-weight: 600; margin: 0;",
                                "{playlist}"
                            }
                            p { class: "text-muted", style: "font-size: 0.875rem; margin: 0.25rem 0 0;",
                                "Your custom playlist"
                            }
                        }
                    }
                }
            }
        }
    }
}
