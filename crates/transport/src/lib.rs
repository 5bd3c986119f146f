//! HTTP transport abstraction for the Wykop API client
//!
//! Defines the `Transport` trait that decouples the request pipeline from the
//! HTTP stack. `ReqwestTransport` performs real network calls; the
//! `test-util` feature adds `MockTransport`, a recording stub used by the
//! pipeline's tests to assert exactly what would have gone over the wire.
//!
//! The transport owns TLS, redirects, connection pooling and timeouts. It never
//! interprets status codes: every completed round trip is an `Ok(HttpResponse)`.

pub mod reqwest_transport;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

#[cfg(any(test, feature = "test-util"))]
pub use mock::MockTransport;
pub use reqwest_transport::ReqwestTransport;

use common::Secret;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// HTTP verbs used by the Wykop API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Upper-case verb for logging and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file attached to a multipart upload.
#[derive(Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name (the Wykop API expects `file`)
    pub field: String,
    pub file_name: String,
    pub content: Vec<u8>,
}

impl FilePart {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content,
        }
    }
}

impl fmt::Debug for FilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePart")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("len", &self.content.len())
            .finish()
    }
}

/// A fully prepared request. Payloads are already stripped and wrapped by
/// the dispatcher; the transport sends them as-is.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present
    pub bearer: Option<Secret<String>>,
    pub query: Vec<(String, String)>,
    /// JSON body. Ignored when `files` is non-empty.
    pub json: Option<serde_json::Value>,
    pub files: Vec<FilePart>,
}

impl HttpRequest {
    /// A bare request with no credential and no payload.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            bearer: None,
            query: Vec::new(),
            json: None,
            files: Vec::new(),
        }
    }
}

/// A completed round trip, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failures of the transport itself (no response was obtained).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("reading response body failed: {0}")]
    Body(String),
}

/// Result alias for transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Abstraction over the HTTP client performing Wykop API calls.
///
/// Uses `Pin<Box<dyn Future>>` return types for dyn-compatibility (`Arc<dyn Transport>`).
pub trait Transport: Send + Sync {
    /// Identifier for logging (e.g. "reqwest", "mock")
    fn id(&self) -> &str;

    /// Perform exactly one round trip.
    fn send(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse>> + Send + '_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_labels_are_upper_case() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn file_part_debug_hides_content() {
        let part = FilePart::new("file", "cat.png", vec![0xde, 0xad, 0xbe, 0xef]);
        let debug = format!("{part:?}");
        assert!(debug.contains("cat.png"));
        assert!(debug.contains("len: 4"), "got: {debug}");
        assert!(!debug.contains("222"), "raw bytes must not be printed: {debug}");
    }

    #[test]
    fn request_debug_redacts_bearer() {
        let mut request = HttpRequest::new(Method::Get, "https://wykop.pl/api/v3/tags/popular");
        request.bearer = Some(Secret::from("jwt-user-token"));
        let debug = format!("{request:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("jwt-user-token"));
    }
}
