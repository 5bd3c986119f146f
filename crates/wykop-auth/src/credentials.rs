//! In-memory credential store
//!
//! Holds the application token and the user session. The user access and
//! refresh tokens live together in one `UserSession` value, so a session either
//! exists whole or not at all and every update replaces both halves at once.
//! A tokio RwLock guards the state: concurrent readers observe the old or the
//! new pair, never a mix.
//!
//! Nothing is persisted; credentials live as long as the process.

use common::Secret;
use tokio::sync::RwLock;
use tracing::debug;

/// A user access token together with the refresh token that renews it.
#[derive(Debug, Clone)]
pub struct UserSession {
    access_token: Secret<String>,
    refresh_token: Secret<String>,
}

impl UserSession {
    pub fn new(access_token: Secret<String>, refresh_token: Secret<String>) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }

    pub fn access_token(&self) -> &Secret<String> {
        &self.access_token
    }

    pub fn refresh_token(&self) -> &Secret<String> {
        &self.refresh_token
    }
}

#[derive(Default)]
struct State {
    app_token: Option<Secret<String>>,
    user: Option<UserSession>,
}

/// Thread-safe holder of the current credentials.
#[derive(Default)]
pub struct CredentialStore {
    state: RwLock<State>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most capable token available: user access token, else app token.
    pub async fn active_token(&self) -> Option<Secret<String>> {
        let state = self.state.read().await;
        state
            .user
            .as_ref()
            .map(|session| session.access_token.clone())
            .or_else(|| state.app_token.clone())
    }

    pub async fn app_token(&self) -> Option<Secret<String>> {
        self.state.read().await.app_token.clone()
    }

    pub async fn user_session(&self) -> Option<UserSession> {
        self.state.read().await.user.clone()
    }

    pub async fn set_app_token(&self, token: Secret<String>) {
        self.state.write().await.app_token = Some(token);
        debug!("stored application token");
    }

    /// Replace the user session wholesale.
    pub async fn set_user_session(&self, session: UserSession) {
        self.state.write().await.user = Some(session);
        debug!("stored user session");
    }

    /// Drop both user tokens. Returns the removed session, if any.
    pub async fn clear_user_session(&self) -> Option<UserSession> {
        let removed = self.state.write().await.user.take();
        if removed.is_some() {
            debug!("cleared user session");
        }
        removed
    }
}
