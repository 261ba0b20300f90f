//! Shared auth state: the current user plus imperative sign-in/out calls.
//! Playback never reads this; it only gates whether the player UI mounts.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

use crate::api::{AuthClient, AuthSession, AuthUser};

#[cfg(target_arch = "wasm32")]
const SESSION_KEY: &str = "onlyvibes.auth_session";

#[derive(Clone, Copy)]
pub struct AuthController {
    user: Signal<Option<AuthUser>>,
    session: Signal<Option<AuthSession>>,
    is_loading: Signal<bool>,
}

impl AuthController {
    pub fn new(
        user: Signal<Option<AuthUser>>,
        session: Signal<Option<AuthSession>>,
        is_loading: Signal<bool>,
    ) -> Self {
        Self {
            user,
            session,
            is_loading,
        }
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.user.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.is_loading.read()
    }

    /// Restore a persisted session on startup. Expired sessions are dropped.
    pub fn restore(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Ok(saved) = LocalStorage::get::<AuthSession>(SESSION_KEY) {
                let expired = saved
                    .expires_at
                    .map(|at| (js_sys::Date::now() / 1000.0) as u64 >= at)
                    .unwrap_or(false);
                if expired {
                    LocalStorage::delete(SESSION_KEY);
                } else {
                    let mut user = self.user;
                    let mut session = self.session;
                    user.set(Some(saved.user.clone()));
                    session.set(Some(saved));
                }
            }
        }
        let mut is_loading = self.is_loading;
        is_loading.set(false);
    }

    fn commit(&self, new_session: AuthSession) {
        #[cfg(target_arch = "wasm32")]
        {
            let _ = LocalStorage::set(SESSION_KEY, &new_session);
        }
        let mut user = self.user;
        let mut session = self.session;
        user.set(Some(new_session.user.clone()));
        session.set(Some(new_session));
    }

    pub async fn sign_in(&self, email: String, password: String) -> Result<(), String> {
        let new_session = AuthClient::new().sign_in(&email, &password).await?;
        self.commit(new_session);
        Ok(())
    }

    /// Returns `true` when the account still needs email confirmation.
    pub async fn sign_up(&self, email: String, password: String) -> Result<bool, String> {
        match AuthClient::new().sign_up(&email, &password).await? {
            Some(new_session) => {
                self.commit(new_session);
                Ok(false)
            }
            None => Ok(true),
        }
    }

    /// Clear local state immediately; token revocation happens in the
    /// background and its failure is not surfaced.
    pub fn sign_out(&self) {
        let mut user = self.user;
        let mut session = self.session;
        let previous = session.peek().clone();
        user.set(None);
        session.set(None);
        #[cfg(target_arch = "wasm32")]
        LocalStorage::delete(SESSION_KEY);

        if let Some(previous) = previous {
            spawn(async move {
                if let Err(_err) = AuthClient::new().sign_out(&previous.access_token).await {
                    #[cfg(not(target_arch = "wasm32"))]
                    eprintln!("sign-out revocation failed: {_err}");
                }
            });
        }
    }

    /// Hand the browser to the provider's hosted Google flow. The provider
    /// redirects back to the dashboard, so no local navigation happens here.
    pub fn sign_in_with_google(&self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(win) = web_sys::window() {
            let origin = win.location().origin().unwrap_or_default();
            let url = AuthClient::new().google_authorize_url(&format!("{origin}/dashboard"));
            let _ = win.location().set_href(&url);
        }
    }
}

/// Read the shared auth state from context; panics when used outside
/// `AppShell` so wiring mistakes fail during development.
pub fn use_auth() -> AuthController {
    use_hook(|| {
        try_consume_context::<AuthController>()
            .expect("no auth state in context: mount this component under AppShell")
    })
}
