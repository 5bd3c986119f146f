//! Wykop API v3 endpoint constants
//!
//! Paths are relative to the API base URL so the whole client can be pointed
//! at a different host (staging, local stub) through configuration.

/// Production API base URL
pub const DEFAULT_API_URL: &str = "https://wykop.pl/api/v3";

/// Application key+secret exchange
pub const AUTH_PATH: &str = "/auth";

/// Returns the browser URL that starts the user authorization handshake
pub const CONNECT_PATH: &str = "/connect";

/// User refresh-token exchange
pub const REFRESH_TOKEN_PATH: &str = "/refresh-token";

/// Join a base URL and an absolute path without doubling the slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
