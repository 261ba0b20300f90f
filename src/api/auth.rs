//! Client for the hosted identity provider (a GoTrue-style REST surface).
//! The app only ever consumes this as "who is signed in" plus imperative
//! sign-in/out calls; playback never depends on it.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const DEFAULT_AUTH_URL: &str = "https://onlyvibes.supabase.co";
const DEFAULT_ANON_KEY: &str = "onlyvibes-public-anon-key";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// A signed-in session as returned by the provider's token endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds) after which `access_token` is no longer valid.
    #[serde(default)]
    pub expires_at: Option<u64>,
    pub user: AuthUser,
}

#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default, alias = "msg")]
    message: Option<String>,
}

pub struct AuthClient {
    base_url: String,
    anon_key: String,
}

impl AuthClient {
    pub fn new() -> Self {
        Self {
            base_url: option_env!("ONLYVIBES_AUTH_URL")
                .unwrap_or(DEFAULT_AUTH_URL)
                .trim_end_matches('/')
                .to_string(),
            anon_key: option_env!("ONLYVIBES_AUTH_ANON_KEY")
                .unwrap_or(DEFAULT_ANON_KEY)
                .to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, String> {
        let response = HTTP_CLIENT
            .post(self.endpoint("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(Self::error_message(response).await);
        }
        response
            .json::<AuthSession>()
            .await
            .map_err(|e| e.to_string())
    }

    /// Register a new account. Returns the session when the provider signs
    /// the user in directly, or `None` when email confirmation is pending.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<AuthSession>, String> {
        let response = HTTP_CLIENT
            .post(self.endpoint("signup"))
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(Self::error_message(response).await);
        }
        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| e.to_string())?;
        if body.get("access_token").is_some() {
            serde_json::from_value(body)
                .map(Some)
                .map_err(|e| e.to_string())
        } else {
            Ok(None)
        }
    }

    /// Revoke the given token server-side. Local state is cleared regardless
    /// of whether this succeeds.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), String> {
        let response = HTTP_CLIENT
            .post(self.endpoint("logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_message(response).await)
        }
    }

    /// URL to hand the browser for the provider's hosted Google OAuth flow.
    pub fn google_authorize_url(&self, redirect_to: &str) -> String {
        format!(
            "{}?provider=google&redirect_to={}",
            self.endpoint("authorize"),
            urlencoding::encode(redirect_to)
        )
    }

    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        response
            .json::<AuthErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error_description.or(body.message))
            .unwrap_or_else(|| format!("Authentication failed ({status})"))
    }
}

impl Default for AuthClient {
    fn default() -> Self {
        Self::new()
    }
}
