//! Authentication lifecycle
//!
//! `AuthClient` owns the credential store and drives every transition:
//!
//! - `authenticate_app` exchanges key+secret for an application token
//!   (NoSession → AppSession, or adds app capability to a user session)
//! - `authenticate_user` installs a caller-supplied access/refresh pair
//!   (any → UserSession). The pair comes from the browser connect flow, which
//!   happens outside this library; `connect_url` only hands out its entry URL.
//! - `refresh_user_token` trades the stored refresh token for a new pair
//!
//! Refresh is a read-modify-write on the pair and the server invalidates the
//! old refresh token on success, so every writer of the pair (refresh, install,
//! clear) takes the same async mutex. A refresh in flight therefore never
//! overwrites a pair installed meanwhile or revives a cleared session.

use std::sync::Arc;

use common::Secret;
use tokio::sync::Mutex;
use tracing::{debug, info};
use transport::Transport;

use crate::constants::{AUTH_PATH, CONNECT_PATH, DEFAULT_API_URL, REFRESH_TOKEN_PATH, endpoint};
use crate::credentials::{CredentialStore, UserSession};
use crate::dispatcher::Dispatcher;
use crate::error::{Error, Result};
use crate::guard;
use crate::token;

/// Which credentials are currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoSession,
    AppSession,
    /// A user session, with or without an application token underneath
    UserSession { has_app_token: bool },
}

/// Manages application and user credentials for a Wykop API client.
pub struct AuthClient {
    dispatcher: Dispatcher,
    credentials: CredentialStore,
    base_url: String,
    refresh_lock: Mutex<()>,
}

impl AuthClient {
    /// Client against the production API.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::with_base_url(transport, DEFAULT_API_URL)
    }

    pub fn with_base_url(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, transport = transport.id(), "auth client created");
        Self {
            dispatcher: Dispatcher::new(transport),
            credentials: CredentialStore::new(),
            base_url,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The dispatcher shared by every call made on behalf of this client.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Exchange the application key and secret for an application token.
    ///
    /// Calling again re-exchanges and overwrites the stored token.
    pub async fn authenticate_app(&self, key: &str, secret: &str) -> Result<()> {
        let url = endpoint(&self.base_url, AUTH_PATH);
        let response = token::exchange_app_token(&self.dispatcher, &url, key, secret).await?;
        self.credentials
            .set_app_token(Secret::new(response.token))
            .await;
        info!("application authenticated");
        Ok(())
    }

    /// Install a user session obtained out of band.
    ///
    /// The pair is stored as given. The access token is not validated here;
    /// the first user-scoped call (or an explicit refresh) proves it.
    pub async fn authenticate_user(
        &self,
        access_token: impl Into<Secret<String>>,
        refresh_token: impl Into<Secret<String>>,
    ) {
        let session = UserSession::new(access_token.into(), refresh_token.into());
        let _guard = self.refresh_lock.lock().await;
        self.credentials.set_user_session(session).await;
        info!("user session installed");
    }

    /// Trade the stored refresh token for a new access/refresh pair.
    ///
    /// Fails with `Unauthenticated` before any network call when no user
    /// session exists. On success both tokens are replaced together and the
    /// new session is returned; the previous refresh token is dead.
    pub async fn refresh_user_token(&self) -> Result<UserSession> {
        let _guard = self.refresh_lock.lock().await;

        let current = self.credentials.user_session().await.ok_or_else(|| {
            Error::Unauthenticated("no refresh token: call authenticate_user() first".into())
        })?;

        let url = endpoint(&self.base_url, REFRESH_TOKEN_PATH);
        let pair =
            token::exchange_refresh_token(&self.dispatcher, &url, current.refresh_token()).await?;

        let renewed = UserSession::new(Secret::new(pair.token), Secret::new(pair.refresh_token));
        self.credentials.set_user_session(renewed.clone()).await;
        info!("user token refreshed");
        Ok(renewed)
    }

    /// Forget the user session (both tokens). The app token, if any, stays.
    pub async fn clear_user_session(&self) {
        let _guard = self.refresh_lock.lock().await;
        if self.credentials.clear_user_session().await.is_some() {
            info!("user session cleared");
        }
    }

    /// The token to present on the next call: user access token, else app token.
    pub async fn active_token(&self) -> Option<Secret<String>> {
        self.credentials.active_token().await
    }

    pub async fn user_session(&self) -> Option<UserSession> {
        self.credentials.user_session().await
    }

    pub async fn session_state(&self) -> SessionState {
        let has_app_token = self.credentials.app_token().await.is_some();
        match self.credentials.user_session().await {
            Some(_) => SessionState::UserSession { has_app_token },
            None if has_app_token => SessionState::AppSession,
            None => SessionState::NoSession,
        }
    }

    /// Fails with `Unauthenticated` unless some credential is present.
    pub async fn require_session(&self) -> Result<Secret<String>> {
        guard::require_session(&self.credentials).await
    }

    /// Fails with `Unauthenticated` unless a full user session is present.
    pub async fn require_user_session(&self) -> Result<UserSession> {
        guard::require_user_session(&self.credentials).await
    }

    /// URL that starts the browser authorization handshake for a user.
    ///
    /// The handshake belongs to the application, so only the app token is
    /// presented, even when a user session is installed.
    pub async fn connect_url(&self) -> Result<String> {
        let token = self.credentials.app_token().await.ok_or_else(|| {
            Error::Unauthenticated(
                "application session required: call authenticate_app() first".into(),
            )
        })?;
        let url = endpoint(&self.base_url, CONNECT_PATH);
        token::fetch_connect_url(&self.dispatcher, &url, &token).await
    }
}
