//! Token endpoint interactions
//!
//! Three exchanges, all JSON and all wrapped in `{"data": ...}`:
//! 1. Application key+secret → application token (`POST /auth`, no credential)
//! 2. User refresh token → new access/refresh pair (`POST /refresh-token`, no credential)
//! 3. Connect URL lookup for the browser handshake (`GET /connect`)

use common::Secret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::dispatcher::{Dispatcher, Params};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// `data` of the application token response.
#[derive(Debug, Deserialize)]
pub struct AppTokenResponse {
    pub token: String,
}

/// `data` of the refresh response: a full replacement pair.
#[derive(Debug, Deserialize)]
pub struct TokenPairResponse {
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct ConnectResponse {
    connect_url: String,
}

fn unwrap_data<T: DeserializeOwned>(body: Option<Value>, what: &str) -> Result<T> {
    let body = body.ok_or_else(|| Error::MalformedResponse(format!("{what}: empty response")))?;
    serde_json::from_value::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| Error::MalformedResponse(format!("{what}: {e}")))
}

/// Exchange the application key and secret for an application token.
pub async fn exchange_app_token(
    dispatcher: &Dispatcher,
    url: &str,
    key: &str,
    secret: &str,
) -> Result<AppTokenResponse> {
    let body = Params::new().with("key", key).with("secret", secret);
    let response = dispatcher
        .post(url, None, body, Params::new(), Vec::new())
        .await?;
    unwrap_data(response, "application token response")
}

/// Exchange a refresh token for a new access/refresh pair.
///
/// A successful exchange invalidates `refresh` on the server.
pub async fn exchange_refresh_token(
    dispatcher: &Dispatcher,
    url: &str,
    refresh: &Secret<String>,
) -> Result<TokenPairResponse> {
    let body = Params::new().with("refresh_token", refresh.expose().as_str());
    let response = dispatcher
        .post(url, None, body, Params::new(), Vec::new())
        .await?;
    unwrap_data(response, "refresh token response")
}

/// Fetch the URL a user opens in a browser to authorize this application.
pub async fn fetch_connect_url(
    dispatcher: &Dispatcher,
    url: &str,
    token: &Secret<String>,
) -> Result<String> {
    let response = dispatcher.get(url, Some(token), Params::new()).await?;
    unwrap_data::<ConnectResponse>(response, "connect response").map(|data| data.connect_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use transport::{Method, MockTransport};

    #[test]
    fn token_pair_deserializes() {
        let json = r#"{"data":{"token":"A2","refresh_token":"R2"}}"#;
        let envelope: Envelope<TokenPairResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.token, "A2");
        assert_eq!(envelope.data.refresh_token, "R2");
    }

    #[tokio::test]
    async fn app_exchange_posts_key_and_secret_without_credential() {
        let mock = Arc::new(MockTransport::new());
        mock.route(Method::Post, "/auth", 200, r#"{"data":{"token":"T1"}}"#);
        let dispatcher = Dispatcher::new(mock.clone());

        let response = exchange_app_token(&dispatcher, "http://stub/auth", "k", "s")
            .await
            .unwrap();

        assert_eq!(response.token, "T1");
        let sent = mock.last_request().unwrap();
        assert!(sent.bearer.is_none());
        assert_eq!(
            sent.json.unwrap(),
            serde_json::json!({"data": {"key": "k", "secret": "s"}})
        );
    }

    #[tokio::test]
    async fn refresh_exchange_sends_refresh_token() {
        let mock = Arc::new(MockTransport::new());
        mock.route(
            Method::Post,
            "/refresh-token",
            200,
            r#"{"data":{"token":"A2","refresh_token":"R2"}}"#,
        );
        let dispatcher = Dispatcher::new(mock.clone());

        let pair = exchange_refresh_token(&dispatcher, "http://stub/refresh-token", &Secret::from("R1"))
            .await
            .unwrap();

        assert_eq!(pair.token, "A2");
        assert_eq!(pair.refresh_token, "R2");
        let sent = mock.last_request().unwrap();
        assert!(sent.bearer.is_none());
        assert_eq!(sent.json.unwrap()["data"]["refresh_token"], "R1");
    }

    #[tokio::test]
    async fn missing_fields_are_malformed() {
        let mock = Arc::new(MockTransport::new());
        mock.route(Method::Post, "/refresh-token", 200, r#"{"data":{"token":"A2"}}"#);
        let dispatcher = Dispatcher::new(mock.clone());

        let err = exchange_refresh_token(&dispatcher, "http://stub/refresh-token", &Secret::from("R1"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn empty_body_is_malformed() {
        let mock = Arc::new(MockTransport::new());
        mock.route(Method::Post, "/auth", 204, "");
        let dispatcher = Dispatcher::new(mock.clone());

        let err = exchange_app_token(&dispatcher, "http://stub/auth", "k", "s")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(ref m) if m.contains("empty")));
    }

    #[tokio::test]
    async fn rejected_app_credentials_map_to_taxonomy() {
        let mock = Arc::new(MockTransport::new());
        mock.route(
            Method::Post,
            "/auth",
            403,
            r#"{"error":{"message":"Invalid key or secret"}}"#,
        );
        let dispatcher = Dispatcher::new(mock.clone());

        let err = exchange_app_token(&dispatcher, "http://stub/auth", "k", "bad")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)));
    }

    #[tokio::test]
    async fn connect_url_is_extracted() {
        let mock = Arc::new(MockTransport::new());
        mock.route(
            Method::Get,
            "/connect",
            200,
            r#"{"data":{"connect_url":"https://wykop.pl/connect/abc"}}"#,
        );
        let dispatcher = Dispatcher::new(mock.clone());

        let url = fetch_connect_url(&dispatcher, "http://stub/connect", &Secret::from("T1"))
            .await
            .unwrap();

        assert_eq!(url, "https://wykop.pl/connect/abc");
        assert_eq!(mock.last_request().unwrap().bearer.unwrap().expose(), "T1");
    }
}
