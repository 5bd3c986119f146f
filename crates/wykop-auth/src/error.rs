//! Error taxonomy for Wykop API calls
//!
//! Remote failures are classified from the HTTP status alone. The Wykop API
//! overloads 400 for "request limit exceeded" and uses 401 for endpoints
//! disabled for the application, so those codes do not carry their usual
//! HTTP meaning.
//!
//! `Transport`, `MalformedResponse` and `InvalidRequest` sit outside the
//! taxonomy: they are local failures that never carry a remote status.

/// Errors from the authenticated request pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No usable credential. Raised locally, never after a network call.
    #[error("authentication required: {0}")]
    Unauthenticated(String),

    /// Remote 404
    #[error("not found: {0}")]
    NotFound(String),

    /// Remote 400
    #[error("request limit exceeded: {0}")]
    RateLimited(String),

    /// Remote 401 (endpoint disabled for this application)
    #[error("endpoint blocked: {0}")]
    Blocked(String),

    /// Remote 403 (credential invalid or expired)
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Any other remote status >= 300
    #[error("API error ({status}): {message}")]
    Generic { status: u16, message: String },

    #[error("transport failed: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Map a failed remote status and its error message to a taxonomy member.
    ///
    /// Callers only pass statuses >= 300.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 => Error::RateLimited(message),
            401 => Error::Blocked(message),
            403 => Error::Forbidden(message),
            404 => Error::NotFound(message),
            _ => Error::Generic { status, message },
        }
    }

    /// Remote status behind this error, if it came from the API.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RateLimited(_) => Some(400),
            Error::Blocked(_) => Some(401),
            Error::Forbidden(_) => Some(403),
            Error::NotFound(_) => Some(404),
            Error::Generic { status, .. } => Some(*status),
            Error::Unauthenticated(_)
            | Error::Transport(_)
            | Error::MalformedResponse(_)
            | Error::InvalidRequest(_) => None,
        }
    }

    /// Whether the caller has to (re-)authenticate before retrying.
    pub fn requires_login(&self) -> bool {
        matches!(self, Error::Unauthenticated(_) | Error::Forbidden(_))
    }

    /// Stable label for logs and metrics.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Error::Unauthenticated(_) => "unauthenticated",
            Error::NotFound(_) => "not_found",
            Error::RateLimited(_) => "rate_limited",
            Error::Blocked(_) => "blocked",
            Error::Forbidden(_) => "forbidden",
            Error::Generic { .. } => "generic",
            Error::Transport(_) => "transport",
            Error::MalformedResponse(_) => "malformed_response",
            Error::InvalidRequest(_) => "invalid_request",
        }
    }
}

impl From<transport::TransportError> for Error {
    fn from(e: transport::TransportError) -> Self {
        Error::Transport(e.to_string())
    }
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_exact() {
        assert!(matches!(Error::from_status(400, "x"), Error::RateLimited(_)));
        assert!(matches!(Error::from_status(401, "x"), Error::Blocked(_)));
        assert!(matches!(Error::from_status(403, "x"), Error::Forbidden(_)));
        assert!(matches!(Error::from_status(404, "x"), Error::NotFound(_)));
        for status in [300, 302, 402, 405, 409, 422, 429, 500, 503] {
            match Error::from_status(status, "boom") {
                Error::Generic { status: s, message } => {
                    assert_eq!(s, status);
                    assert_eq!(message, "boom");
                }
                other => panic!("status {status} mapped to {other:?}"),
            }
        }
    }

    #[test]
    fn status_roundtrips_for_remote_errors() {
        for status in [400, 401, 403, 404, 500] {
            assert_eq!(Error::from_status(status, "m").status(), Some(status));
        }
        assert_eq!(Error::Unauthenticated("no token".into()).status(), None);
        assert_eq!(Error::MalformedResponse("eof".into()).status(), None);
    }

    #[test]
    fn requires_login_only_for_auth_failures() {
        assert!(Error::Unauthenticated("x".into()).requires_login());
        assert!(Error::Forbidden("expired".into()).requires_login());
        assert!(!Error::Blocked("disabled".into()).requires_login());
        assert!(!Error::RateLimited("slow down".into()).requires_login());
    }

    #[test]
    fn display_carries_remote_message() {
        let err = Error::from_status(500, "Internal error");
        assert_eq!(err.to_string(), "API error (500): Internal error");
        let err = Error::from_status(400, "Limit zapytań został przekroczony");
        assert!(err.to_string().contains("Limit zapytań"));
    }

    #[test]
    fn transport_errors_convert() {
        let err: Error = transport::TransportError::Http("connection refused".into()).into();
        assert!(matches!(err, Error::Transport(ref m) if m.contains("connection refused")));
        assert_eq!(err.kind_label(), "transport");
    }
}
