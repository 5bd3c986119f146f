//! The catalog client
//!
//! `WykopClient` is a thin layer over `AuthClient`: every endpoint method picks
//! a credential, builds a URL and one payload, and hands them to the shared
//! dispatcher. Two credential rules exist:
//!
//! - public endpoints present whatever token is active (user beats app)
//! - user-scoped endpoints pass the user-session guard first and present the
//!   user access token it returns; without a user session they fail with
//!   `Unauthenticated` and nothing is sent

use std::borrow::Cow;
use std::sync::Arc;

use common::Secret;
use serde_json::Value;
use tracing::debug;
use transport::{FilePart, Method};
use wykop_auth::{AuthClient, Dispatcher, Error, Params, Result, endpoint};

/// Percent-encode a caller-supplied value for use as one path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Wykop API v3 client. Endpoint methods live in the per-area modules.
#[derive(Clone)]
pub struct WykopClient {
    auth: Arc<AuthClient>,
}

impl WykopClient {
    /// Wrap an authenticated `AuthClient`.
    ///
    /// Fails with `Unauthenticated` unless an app or user session exists.
    pub async fn new(auth: Arc<AuthClient>) -> Result<Self> {
        auth.require_session().await?;
        debug!(base_url = auth.base_url(), "catalog client ready");
        Ok(Self { auth })
    }

    pub fn auth(&self) -> &Arc<AuthClient> {
        &self.auth
    }

    /// Send an arbitrary request with the active token.
    ///
    /// `url` is absolute or a path under the configured base URL. GET takes no
    /// body, PUT takes no query and DELETE takes neither; violating that is an
    /// `InvalidRequest` and nothing is sent.
    pub async fn raw_request(
        &self,
        url: &str,
        method: Method,
        data: Params,
        params: Params,
    ) -> Result<Option<Value>> {
        match method {
            Method::Get if !data.is_empty() => {
                return Err(Error::InvalidRequest(
                    "GET does not take a body, pass query parameters instead".into(),
                ));
            }
            Method::Put if !params.is_empty() => {
                return Err(Error::InvalidRequest(
                    "PUT does not take query parameters, pass a body instead".into(),
                ));
            }
            Method::Delete if !data.is_empty() || !params.is_empty() => {
                return Err(Error::InvalidRequest(
                    "DELETE takes neither a body nor query parameters".into(),
                ));
            }
            _ => {}
        }

        let url = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            self.url(url)
        };
        let token = self.auth.active_token().await;
        let token = token.as_ref();
        let dispatcher = self.dispatcher();

        match method {
            Method::Get => dispatcher.get(&url, token, params).await,
            Method::Post => dispatcher.post(&url, token, data, params, Vec::new()).await,
            Method::Put => dispatcher.put(&url, token, data).await,
            Method::Delete => dispatcher.delete(&url, token).await,
        }
    }

    fn dispatcher(&self) -> &Dispatcher {
        self.auth.dispatcher()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        endpoint(self.auth.base_url(), path)
    }

    async fn user_token(&self) -> Result<Secret<String>> {
        let session = self.auth.require_user_session().await?;
        Ok(session.access_token().clone())
    }

    /// GET with the active token, or none at all.
    pub(crate) async fn public_get(&self, path: &str, query: Params) -> Result<Option<Value>> {
        let token = self.auth.active_token().await;
        self.dispatcher()
            .get(&self.url(path), token.as_ref(), query)
            .await
    }

    pub(crate) async fn user_get(&self, path: &str, query: Params) -> Result<Option<Value>> {
        let token = self.user_token().await?;
        self.dispatcher()
            .get(&self.url(path), Some(&token), query)
            .await
    }

    pub(crate) async fn user_post(&self, path: &str, body: Params) -> Result<Option<Value>> {
        self.user_upload(path, body, Params::new(), Vec::new()).await
    }

    /// POST with query parameters and optional multipart files.
    pub(crate) async fn user_upload(
        &self,
        path: &str,
        body: Params,
        query: Params,
        files: Vec<FilePart>,
    ) -> Result<Option<Value>> {
        let token = self.user_token().await?;
        self.dispatcher()
            .post(&self.url(path), Some(&token), body, query, files)
            .await
    }

    pub(crate) async fn user_put(&self, path: &str, body: Params) -> Result<Option<Value>> {
        let token = self.user_token().await?;
        self.dispatcher()
            .put(&self.url(path), Some(&token), body)
            .await
    }

    pub(crate) async fn user_delete(&self, path: &str) -> Result<Option<Value>> {
        let token = self.user_token().await?;
        self.dispatcher().delete(&self.url(path), Some(&token)).await
    }
}
