//! Request dispatcher
//!
//! Turns "URL + verb + optional payloads + optional token" into exactly one
//! transport round trip and a typed result:
//!
//! 1. Blank entries (`null`, `""`, `[]`, `{}`) are stripped from body, query
//!    and files. The API treats an omitted field differently from an empty
//!    one, so blanks must never reach the wire.
//! 2. A non-empty body is wrapped as `{"data": <body>}`.
//! 3. A token, when given, is presented as a bearer credential.
//! 4. Status < 300 decodes the JSON body (empty body → `None`); status >= 300
//!    decodes `{"error": ...}` and maps the status onto the error taxonomy.

use std::sync::Arc;

use common::Secret;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};
use transport::{FilePart, HttpRequest, HttpResponse, Method, Transport};

use crate::error::{Error, Result};
use crate::metrics;

/// Key→value payload for a request body or query string.
///
/// `Option` values convert to `null` and are stripped with the other blanks,
/// so optional endpoint arguments can be passed straight through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries that survive the stripping rule.
    pub fn stripped(&self) -> Map<String, Value> {
        self.0
            .iter()
            .filter(|(_, value)| !is_blank(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// `{"data": ...}` envelope, or `None` when nothing survives stripping.
    fn into_body(self) -> Option<Value> {
        let data = self.stripped();
        if data.is_empty() {
            None
        } else {
            Some(serde_json::json!({ "data": data }))
        }
    }

    fn into_query(self) -> Vec<(String, String)> {
        self.stripped()
            .into_iter()
            .map(|(key, value)| (key, query_value(&value)))
            .collect()
    }
}

impl FromIterator<(String, Value)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(query_value).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Value,
}

/// Sends prepared requests through a `Transport` and classifies the outcome.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn get(
        &self,
        url: &str,
        token: Option<&Secret<String>>,
        query: Params,
    ) -> Result<Option<Value>> {
        let mut request = prepare(Method::Get, url, token);
        request.query = query.into_query();
        self.dispatch(request).await
    }

    pub async fn post(
        &self,
        url: &str,
        token: Option<&Secret<String>>,
        body: Params,
        query: Params,
        files: Vec<FilePart>,
    ) -> Result<Option<Value>> {
        let mut request = prepare(Method::Post, url, token);
        request.json = body.into_body();
        request.query = query.into_query();
        request.files = files
            .into_iter()
            .filter(|file| !file.content.is_empty())
            .collect();
        self.dispatch(request).await
    }

    pub async fn put(
        &self,
        url: &str,
        token: Option<&Secret<String>>,
        body: Params,
    ) -> Result<Option<Value>> {
        let mut request = prepare(Method::Put, url, token);
        request.json = body.into_body();
        self.dispatch(request).await
    }

    pub async fn delete(&self, url: &str, token: Option<&Secret<String>>) -> Result<Option<Value>> {
        self.dispatch(prepare(Method::Delete, url, token)).await
    }

    #[instrument(
        skip_all,
        fields(
            request_id = %format!("req_{}", uuid::Uuid::new_v4().as_simple()),
            transport = self.transport.id(),
            method = %request.method,
            url = %request.url,
            authenticated = request.bearer.is_some(),
        )
    )]
    async fn dispatch(&self, request: HttpRequest) -> Result<Option<Value>> {
        let method = request.method;
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                let err = Error::from(e);
                metrics::record_error(err.kind_label());
                warn!(error = %err, "transport failed");
                return Err(err);
            }
        };

        let status = response.status;
        metrics::record_request(method.as_str(), status);

        match decode(response) {
            Ok(body) => {
                debug!(status, has_body = body.is_some(), "request succeeded");
                Ok(body)
            }
            Err(err) => {
                metrics::record_error(err.kind_label());
                warn!(status, kind = err.kind_label(), error = %err, "request failed");
                Err(err)
            }
        }
    }
}

fn prepare(method: Method, url: &str, token: Option<&Secret<String>>) -> HttpRequest {
    let mut request = HttpRequest::new(method, url);
    request.bearer = token.cloned();
    request
}

fn decode(response: HttpResponse) -> Result<Option<Value>> {
    if response.status >= 300 {
        return Err(remote_error(response.status, &response.body));
    }
    if response.body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&response.body)
        .map(Some)
        .map_err(|e| {
            Error::MalformedResponse(format!(
                "invalid JSON in {} response: {e}",
                response.status
            ))
        })
}

fn remote_error(status: u16, body: &str) -> Error {
    let envelope: ErrorEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            return Error::MalformedResponse(format!(
                "undecodable error payload for status {status}: {e}"
            ));
        }
    };

    let message = match &envelope.error {
        Value::String(message) => message.clone(),
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| envelope.error.to_string()),
        other => other.to_string(),
    };
    Error::from_status(status, message)
}
