//! Precondition checks for authenticated operations
//!
//! Both checks read the credential store and nothing else. What they return
//! is the credential they vouched for, so the caller presents exactly that
//! token instead of re-reading the store afterwards.

use common::Secret;

use crate::credentials::{CredentialStore, UserSession};
use crate::error::{Error, Result};

/// Some credential (app or user) must be present. Returns the active token.
pub async fn require_session(store: &CredentialStore) -> Result<Secret<String>> {
    store.active_token().await.ok_or_else(|| {
        Error::Unauthenticated(
            "no session: call authenticate_app() or authenticate_user() first".into(),
        )
    })
}

/// A full user session (access and refresh token) must be present.
pub async fn require_user_session(store: &CredentialStore) -> Result<UserSession> {
    store.user_session().await.ok_or_else(|| {
        Error::Unauthenticated("user session required: call authenticate_user() first".into())
    })
}
