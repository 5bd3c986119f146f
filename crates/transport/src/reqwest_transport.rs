//! reqwest-backed transport used in production.

use crate::{HttpRequest, HttpResponse, Method, Result, Transport, TransportError};
use reqwest::multipart::{Form, Part};
use std::future::Future;
use std::pin::Pin;
use tracing::debug;

/// Sends requests with a shared `reqwest::Client`.
///
/// Timeouts, TLS and pooling are whatever the supplied client was built with.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl Transport for ReqwestTransport {
    fn id(&self) -> &str {
        "reqwest"
    }

    fn send(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse>> + Send + '_>> {
        Box::pin(async move {
            let mut builder = match request.method {
                Method::Get => self.client.get(&request.url),
                Method::Post => self.client.post(&request.url),
                Method::Put => self.client.put(&request.url),
                Method::Delete => self.client.delete(&request.url),
            };

            if let Some(token) = &request.bearer {
                builder = builder.bearer_auth(token.expose());
            }
            if !request.query.is_empty() {
                builder = builder.query(&request.query);
            }

            // Multipart uploads carry the file parts only; a JSON body cannot ride along.
            if !request.files.is_empty() {
                let mut form = Form::new();
                for file in request.files {
                    let part = Part::bytes(file.content).file_name(file.file_name);
                    form = form.part(file.field, part);
                }
                builder = builder.multipart(form);
            } else if let Some(json) = &request.json {
                builder = builder.json(json);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError::Http(format!("{} {}: {e}", request.method, request.url)))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Body(e.to_string()))?;

            debug!(status, bytes = body.len(), "transport round trip complete");
            Ok(HttpResponse { status, body })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilePart;
    use axum::body::Body;
    use axum::http::StatusCode;
    use common::Secret;
    use tokio::net::TcpListener;

    /// Start a mock upstream server that echoes back request headers and body as JSON.
    async fn start_echo_server() -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let url = format!("http://{addr}");

        let handle = tokio::spawn(async move {
            let app =
                axum::Router::new().fallback(|request: axum::http::Request<Body>| async move {
                    let mut headers_map = serde_json::Map::new();
                    for (name, value) in request.headers() {
                        headers_map.insert(
                            name.to_string(),
                            serde_json::Value::String(value.to_str().unwrap_or("").to_string()),
                        );
                    }
                    let method = request.method().to_string();
                    let path = request.uri().path().to_string();
                    let query = request.uri().query().unwrap_or("").to_string();
                    let body_bytes = axum::body::to_bytes(request.into_body(), 10 * 1024 * 1024)
                        .await
                        .unwrap();
                    let body_str = String::from_utf8_lossy(&body_bytes).to_string();
                    let body = serde_json::json!({
                        "echoed_headers": headers_map,
                        "method": method,
                        "path": path,
                        "query": query,
                        "body": body_str,
                    });
                    (StatusCode::OK, axum::Json(body))
                });
            axum::serve(listener, app).await.unwrap();
        });

        (url, handle)
    }

    async fn echo(request: HttpRequest) -> serde_json::Value {
        let response = ReqwestTransport::default().send(request).await.unwrap();
        assert_eq!(response.status, 200);
        serde_json::from_str(&response.body).unwrap()
    }

    #[tokio::test]
    async fn sends_bearer_header_when_token_present() {
        let (url, _server) = start_echo_server().await;

        let mut request = HttpRequest::new(Method::Get, format!("{url}/tags/popular"));
        request.bearer = Some(Secret::from("T1"));
        let echoed = echo(request).await;

        assert_eq!(echoed["method"], "GET");
        assert_eq!(echoed["path"], "/tags/popular");
        assert_eq!(echoed["echoed_headers"]["authorization"], "Bearer T1");
    }

    #[tokio::test]
    async fn omits_authorization_without_token() {
        let (url, _server) = start_echo_server().await;

        let echoed = echo(HttpRequest::new(Method::Delete, format!("{url}/entries/1"))).await;

        assert_eq!(echoed["method"], "DELETE");
        assert!(echoed["echoed_headers"].get("authorization").is_none());
    }

    #[tokio::test]
    async fn sends_query_and_json_body() {
        let (url, _server) = start_echo_server().await;

        let mut request = HttpRequest::new(Method::Post, format!("{url}/media/photos"));
        request.query = vec![("type".into(), "comments".into())];
        request.json = Some(serde_json::json!({"data": {"url": "https://example.com/a.png"}}));
        let echoed = echo(request).await;

        assert_eq!(echoed["query"], "type=comments");
        assert_eq!(echoed["echoed_headers"]["content-type"], "application/json");
        let body: serde_json::Value =
            serde_json::from_str(echoed["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["data"]["url"], "https://example.com/a.png");
    }

    #[tokio::test]
    async fn files_are_sent_as_multipart() {
        let (url, _server) = start_echo_server().await;

        let mut request = HttpRequest::new(Method::Post, format!("{url}/media/photos/upload"));
        request.json = Some(serde_json::json!({"data": {"ignored": true}}));
        request.files = vec![FilePart::new("file", "photo.png", b"png-bytes".to_vec())];
        let echoed = echo(request).await;

        let content_type = echoed["echoed_headers"]["content-type"].as_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data"), "got: {content_type}");
        let body = echoed["body"].as_str().unwrap();
        assert!(body.contains("name=\"file\""));
        assert!(body.contains("filename=\"photo.png\""));
        assert!(body.contains("png-bytes"));
        assert!(!body.contains("ignored"));
    }

    #[tokio::test]
    async fn non_success_status_is_not_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let app = axum::Router::new().fallback(|| async {
                (
                    StatusCode::NOT_FOUND,
                    [(axum::http::header::CONTENT_TYPE, "application/json")],
                    r#"{"error":{"code":404,"message":"Nie znaleziono"}}"#,
                )
            });
            axum::serve(listener, app).await.unwrap();
        });

        let response = ReqwestTransport::default()
            .send(HttpRequest::new(Method::Get, format!("http://{addr}/links/0")))
            .await
            .unwrap();

        assert_eq!(response.status, 404);
        assert!(response.body.contains("Nie znaleziono"));
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = ReqwestTransport::default()
            .send(HttpRequest::new(Method::Get, format!("http://{addr}/auth")))
            .await;

        assert!(matches!(result, Err(TransportError::Http(_))));
    }

    #[test]
    fn id_returns_reqwest() {
        assert_eq!(ReqwestTransport::default().id(), "reqwest");
    }
}
