//! Recording transport for tests.
//!
//! Routes match on method plus URL suffix (the base URL is irrelevant to the
//! pipeline under test). A route with several queued responses hands them out
//! in order and then keeps repeating the last one. Every request is recorded,
//! including ones that match no route.

use crate::{HttpRequest, HttpResponse, Method, Result, Transport, TransportError};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

struct Route {
    method: Method,
    path: String,
    responses: VecDeque<HttpResponse>,
}

/// In-memory transport that records requests and replays canned responses.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method` requests whose URL ends with `path`.
    pub fn route(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        let mut routes = self.routes.lock().unwrap_or_else(|e| e.into_inner());
        let response = HttpResponse::new(status, body);
        match routes
            .iter_mut()
            .find(|r| r.method == method && r.path == path)
        {
            Some(route) => route.responses.push_back(response),
            None => routes.push(Route {
                method,
                path: path.to_string(),
                responses: VecDeque::from([response]),
            }),
        }
        self
    }

    /// Snapshot of every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn respond(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut routes = self.routes.lock().unwrap_or_else(|e| e.into_inner());
        let route = routes
            .iter_mut()
            .find(|r| r.method == request.method && request.url.ends_with(&r.path))
            .ok_or_else(|| {
                TransportError::Http(format!(
                    "no mock route for {} {}",
                    request.method, request.url
                ))
            })?;

        if route.responses.len() > 1 {
            route
                .responses
                .pop_front()
                .ok_or_else(|| TransportError::Http("mock route drained".into()))
        } else {
            route
                .responses
                .front()
                .cloned()
                .ok_or_else(|| TransportError::Http("mock route drained".into()))
        }
    }
}

impl Transport for MockTransport {
    fn id(&self) -> &str {
        "mock"
    }

    fn send(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse>> + Send + '_>> {
        let result = self.respond(&request);
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_route_and_records_request() {
        let mock = MockTransport::new();
        mock.route(Method::Get, "/tags/popular", 200, r#"{"data":[]}"#);

        let response = mock
            .send(HttpRequest::new(Method::Get, "https://wykop.pl/api/v3/tags/popular"))
            .await
            .unwrap();

        assert_eq!(response, HttpResponse::new(200, r#"{"data":[]}"#));
        assert_eq!(mock.call_count(), 1);
        assert_eq!(
            mock.last_request().unwrap().url,
            "https://wykop.pl/api/v3/tags/popular"
        );
    }

    #[tokio::test]
    async fn queued_responses_are_consumed_then_last_repeats() {
        let mock = MockTransport::new();
        mock.route(Method::Post, "/refresh-token", 200, "first")
            .route(Method::Post, "/refresh-token", 200, "second");

        let mut bodies = Vec::new();
        for _ in 0..3 {
            let response = mock
                .send(HttpRequest::new(Method::Post, "http://stub/refresh-token"))
                .await
                .unwrap();
            bodies.push(response.body);
        }

        assert_eq!(bodies, vec!["first", "second", "second"]);
    }

    #[tokio::test]
    async fn method_must_match() {
        let mock = MockTransport::new();
        mock.route(Method::Post, "/entries", 200, "{}");

        let result = mock
            .send(HttpRequest::new(Method::Get, "http://stub/entries"))
            .await;

        assert!(matches!(result, Err(TransportError::Http(_))));
        // Unmatched requests are still recorded
        assert_eq!(mock.call_count(), 1);
    }
}
