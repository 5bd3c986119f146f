//! Configuration types and loading
//!
//! Config precedence: CLI args > env vars > config file > defaults.
//! Secrets (app secret, user tokens) are never read from the TOML itself:
//! the app secret comes from WYKOP_APP_SECRET or `app.secret_file`, the user
//! pair from WYKOP_USER_TOKEN + WYKOP_USER_REFRESH_TOKEN.

use common::Secret;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use wykop_auth::DEFAULT_API_URL;

pub const DEFAULT_CONFIG_FILE: &str = "wykop.toml";

/// Root configuration
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub app: AppConfig,
    /// User session supplied through the environment
    #[serde(skip)]
    pub user: Option<UserTokens>,
}

/// Where and how to reach the API
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Application credentials
#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(skip)]
    pub secret: Option<Secret<String>>,
    /// Path to a file containing the app secret (alternative to WYKOP_APP_SECRET)
    #[serde(default)]
    pub secret_file: Option<PathBuf>,
}

impl AppConfig {
    /// Key and secret, when both are configured.
    pub fn credentials(&self) -> Option<(&str, &Secret<String>)> {
        Some((self.key.as_deref()?, self.secret.as_ref()?))
    }
}

/// A user access/refresh pair
#[derive(Debug)]
pub struct UserTokens {
    pub access_token: Secret<String>,
    pub refresh_token: Secret<String>,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from a TOML file, then overlay environment variables.
    pub fn load(path: &Path) -> common::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate TOML contents, then overlay environment variables.
    ///
    /// App secret resolution order:
    /// 1. WYKOP_APP_SECRET env var
    /// 2. secret_file path from config
    pub fn parse(contents: &str) -> common::Result<Self> {
        let mut config: Config = toml::from_str(contents)?;

        if !config.api.base_url.starts_with("http://")
            && !config.api.base_url.starts_with("https://")
        {
            return Err(common::Error::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                config.api.base_url
            )));
        }

        if config.api.timeout_secs == 0 {
            return Err(common::Error::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if let Some(key) = env_value("WYKOP_APP_KEY") {
            config.app.key = Some(key);
        }

        if let Some(secret) = env_value("WYKOP_APP_SECRET") {
            config.app.secret = Some(Secret::new(secret));
        } else if let Some(ref secret_file) = config.app.secret_file {
            let secret = std::fs::read_to_string(secret_file).map_err(|e| {
                common::Error::Config(format!(
                    "failed to read secret_file {}: {e}",
                    secret_file.display()
                ))
            })?;
            let secret = secret.trim().to_owned();
            if !secret.is_empty() {
                config.app.secret = Some(Secret::new(secret));
            }
        }

        config.user = match (
            env_value("WYKOP_USER_TOKEN"),
            env_value("WYKOP_USER_REFRESH_TOKEN"),
        ) {
            (Some(access), Some(refresh)) => Some(UserTokens {
                access_token: Secret::new(access),
                refresh_token: Secret::new(refresh),
            }),
            (None, None) => None,
            _ => {
                return Err(common::Error::Config(
                    "WYKOP_USER_TOKEN and WYKOP_USER_REFRESH_TOKEN must be set together".into(),
                ));
            }
        };

        Ok(config)
    }

    /// Resolve config file path from CLI arg or CONFIG_PATH env var.
    pub fn resolve_path(cli_path: Option<&str>) -> PathBuf {
        if let Some(p) = cli_path {
            return PathBuf::from(p);
        }
        if let Ok(p) = std::env::var("CONFIG_PATH") {
            return PathBuf::from(p);
        }
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }
}
