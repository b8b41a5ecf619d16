//! Session state and token storage.
//!
//! The bearer token lives in exactly one of two browser storage scopes:
//! local storage when the user checked "remember me", session storage
//! otherwise. [`AuthContext`] wraps the login/verify/logout operations
//! around that invariant and is provided once at application mount.

use gloo_storage::{LocalStorage, SessionStorage, Storage};
use leptos::*;

use crate::config::TOKEN_STORAGE_KEY;
use crate::services::ApiClient;
use crate::types::{AppResult, LoginRequest, LoginResponse, VerifyResponse};

// =============================================================================
// Token storage
// =============================================================================

/// Reads the token from either scope, persistent first.
pub fn stored_token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_STORAGE_KEY)
        .ok()
        .or_else(|| SessionStorage::get::<String>(TOKEN_STORAGE_KEY).ok())
}

/// Stores the token in the scope selected by `persist`.
///
/// Clears both scopes first so only one ever holds a value.
pub fn store_token(token: &str, persist: bool) {
    clear_token();
    let result = if persist {
        LocalStorage::set(TOKEN_STORAGE_KEY, token)
    } else {
        SessionStorage::set(TOKEN_STORAGE_KEY, token)
    };
    if let Err(e) = result {
        log::error!("Failed to store token: {}", e);
    }
}

/// Removes the token from both scopes.
pub fn clear_token() {
    LocalStorage::delete(TOKEN_STORAGE_KEY);
    SessionStorage::delete(TOKEN_STORAGE_KEY);
}

// =============================================================================
// Auth context
// =============================================================================

/// Session state shared through Leptos context.
///
/// Holds the HTTP client as a constructor dependency; pages reach the
/// context via [`use_auth`].
#[derive(Clone)]
pub struct AuthContext {
    api: ApiClient,
    /// Whether the current session is authenticated.
    pub authenticated: ReadSignal<bool>,
    /// True until the initial token verification resolves.
    pub verifying: ReadSignal<bool>,
    set_authenticated: WriteSignal<bool>,
    set_verifying: WriteSignal<bool>,
}

impl AuthContext {
    pub fn new(api: ApiClient) -> Self {
        let (authenticated, set_authenticated) = create_signal(false);
        let (verifying, set_verifying) = create_signal(true);
        Self {
            api,
            authenticated,
            verifying,
            set_authenticated,
            set_verifying,
        }
    }

    /// Verifies any stored token against the backend.
    ///
    /// No stored token means no network call. An invalid token or any
    /// transport failure clears both storage scopes; there is no retry.
    pub fn init(&self) {
        let auth = self.clone();
        spawn_local(async move {
            if stored_token().is_none() {
                auth.set_verifying.set(false);
                return;
            }

            match auth.api.get_json::<VerifyResponse>("/auth/verify").await {
                Ok(response) if response.valid => {
                    log::info!("🔑 Stored token verified");
                    auth.set_authenticated.set(true);
                }
                Ok(_) => {
                    log::warn!("Stored token rejected, clearing session");
                    clear_token();
                    auth.set_authenticated.set(false);
                }
                Err(e) => {
                    log::warn!("Token verification failed: {}", e);
                    clear_token();
                    auth.set_authenticated.set(false);
                }
            }
            auth.set_verifying.set(false);
        });
    }

    /// Posts credentials and stores the returned token.
    ///
    /// `remember` selects persistent storage; otherwise the token dies
    /// with the browser session.
    pub async fn login(&self, username: &str, password: &str, remember: bool) -> AppResult<()> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            remember_me: remember,
        };
        let response: LoginResponse = self.api.post_json("/auth/login", &body).await?;

        store_token(&response.token, remember);
        self.set_authenticated.set(true);
        log::info!("🔓 Login successful");
        Ok(())
    }

    /// Clears both storage scopes and marks the session unauthenticated.
    ///
    /// Purely local; no backend call.
    pub fn logout(&self) {
        clear_token();
        self.set_authenticated.set(false);
        log::info!("🔒 Logged out");
    }
}

/// Creates the auth context, kicks off token verification, and provides
/// it to the component tree.
pub fn provide_auth(api: ApiClient) -> AuthContext {
    let auth = AuthContext::new(api);
    auth.init();
    provide_context(auth.clone());
    auth
}

/// Fetches the auth context provided at application mount.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
