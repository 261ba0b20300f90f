use dioxus::prelude::*;

use crate::components::{AppView, Icon};

const USER_PLAYLISTS: [&str; 6] = [
    "Chill Mix",
    "Late Night Coding",
    "Workout Beats",
    "Lo-Fi Focus",
    "80s Revival",
    "Ambient Dreams",
];

#[component]
pub fn Sidebar() -> Element {
    let view = use_route::<AppView>();
    let navigator = use_navigator();

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-section",
                NavItem {
                    icon: "home",
                    label: "Home",
                    active: matches!(view, AppView::Home {}),
                    onclick: move |_| {
                        navigator.push(AppView::Home {});
                    },
                }
                NavItem {
                    icon: "grid",
                    label: "Dashboard",
                    active: matches!(view, AppView::Dashboard {}),
                    onclick: move |_| {
                        navigator.push(AppView::Dashboard {});
                    },
                }
                // The search page can be built out later.
                button { class: "nav-item", disabled: true,
                    Icon { name: "search".to_string(), class: "w-5 h-5".to_string() }
                    span { "Search" }
                }
            }

            div { class: "sidebar-section", style: "flex: 1; overflow-y: auto;",
                div { class: "nav-item",
                    Icon { name: "library".to_string(), class: "w-5 h-5".to_string() }
                    span { "Your Library" }
                }
                for playlist in USER_PLAYLISTS {
                    button { class: "nav-item", key: "{playlist}",
                        div {
                            p { style: "margin: 0; color: var(--text);", "{playlist}" }
                            p { class: "text-muted", style: "margin: 0; font-size: 0.75rem; font-weight: 400;",
                                "Playlist"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(icon: String, label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let class = if active { "nav-item active" } else { "nav-item" };

    rsx! {
        button { class: "{class}", onclick: move |e| onclick.call(e),
            Icon { name: icon.clone(), class: "w-5 h-5".to_string() }
            span { "{label}" }
        }
    }
}
