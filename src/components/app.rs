use dioxus::prelude::*;

use crate::api::{AuthSession, AuthUser};
use crate::components::audio_manager::{AudioController, PlaybackSession, PlayerController};
use crate::components::{AppView, AuthController, Player, Sidebar};

/// Root layout. Creates the one playback session and the one auth state for
/// the whole app and provides both through context; every UI surface below
/// reads the same instances.
#[component]
pub fn AppShell() -> Element {
    let session = use_signal(PlaybackSession::default);
    let volume = use_signal(|| 1.0f64);
    let playback_error = use_signal(|| None::<String>);
    let player = PlayerController::new(session, volume, playback_error);
    use_context_provider(|| player);

    let user = use_signal(|| None::<AuthUser>);
    let auth_session = use_signal(|| None::<AuthSession>);
    let is_loading = use_signal(|| true);
    let auth = AuthController::new(user, auth_session, is_loading);
    use_context_provider(|| auth);

    // Restore a persisted sign-in once on mount.
    use_effect(move || auth.restore());

    let route = use_route::<AppView>();
    let on_login_screen = matches!(route, AppView::Login {});
    // The player bar is gated on identity, not fed by it.
    let show_player = !on_login_screen && auth.current_user().is_some();

    rsx! {
        div { class: "app-container",
            if !on_login_screen {
                Sidebar {}
            }

            div { class: "main-scroll",
                div { class: "page-shell", Outlet::<AppView> {} }
            }

            if show_player {
                Player {}
            }
        }

        // Audio controller - manages playback separately from UI
        AudioController {}
    }
}
