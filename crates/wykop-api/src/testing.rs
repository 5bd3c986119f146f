//! Client fixtures shared by the catalog tests

use std::sync::Arc;

use transport::{Method, MockTransport};
use wykop_auth::AuthClient;

use crate::WykopClient;

pub const BASE_URL: &str = "http://stub/api/v3";

/// Client holding only an application token (`APP`). Costs one mocked call.
pub async fn app_client(mock: &Arc<MockTransport>) -> WykopClient {
    mock.route(Method::Post, "/auth", 200, r#"{"data":{"token":"APP"}}"#);
    let auth = Arc::new(AuthClient::with_base_url(mock.clone(), BASE_URL));
    auth.authenticate_app("key", "secret").await.unwrap();
    WykopClient::new(auth).await.unwrap()
}

/// Client holding only a user session (`USER`/`REFRESH`). No mocked calls.
pub async fn user_client(mock: &Arc<MockTransport>) -> WykopClient {
    let auth = Arc::new(AuthClient::with_base_url(mock.clone(), BASE_URL));
    auth.authenticate_user("USER", "REFRESH").await;
    WykopClient::new(auth).await.unwrap()
}
