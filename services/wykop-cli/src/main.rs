//! Wykop API command-line client
//!
//! Thin binary over `wykop-auth` and `wykop-api`:
//! 1. Loads configuration (file + environment)
//! 2. Authenticates the application when key and secret are configured
//! 3. Installs the user session when a token pair is configured
//! 4. Runs one command and prints its result to stdout
//!
//! Logs go to stderr as JSON so stdout stays machine-readable.

mod command;
mod config;
mod error;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transport::ReqwestTransport;
use wykop_api::{AuthClient, SessionState, WykopClient};

use crate::command::{Cli, Command};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and LOG_LEVEL / RUST_LOG support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    // Usage errors print help and exit with status 2
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let auth = connect(&config).await?;
    let output = execute(cli.command, auth).await?;
    println!("{output}");
    Ok(())
}

/// Load the config file, falling back to defaults plus environment when the
/// default file is absent.
fn load_config(cli: &Cli) -> Result<Config> {
    let config_path = Config::resolve_path(cli.config.as_deref());
    let explicit = cli.config.is_some();

    let config = if explicit || config_path.exists() {
        info!(path = %config_path.display(), "loading configuration");
        Config::load(&config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?
    } else {
        info!("no config file, using defaults and environment");
        Config::parse("").context("invalid configuration in environment")?
    };

    info!(
        base_url = %config.api.base_url,
        timeout_secs = config.api.timeout_secs,
        app_key = config.app.key.is_some(),
        user_session = config.user.is_some(),
        "configuration loaded"
    );
    Ok(config)
}

/// Build the HTTP stack and establish whatever sessions the config allows.
async fn connect(config: &Config) -> Result<Arc<AuthClient>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.api.timeout_secs))
        .build()
        .context("failed to build HTTP client")?;
    let transport = Arc::new(ReqwestTransport::new(client));
    let auth = Arc::new(AuthClient::with_base_url(
        transport,
        config.api.base_url.as_str(),
    ));

    if let Some((key, secret)) = config.app.credentials() {
        auth.authenticate_app(key, secret.expose())
            .await
            .context("application authentication failed")?;
    }
    if let Some(user) = &config.user {
        auth.authenticate_user(user.access_token.clone(), user.refresh_token.clone())
            .await;
    }
    Ok(auth)
}

/// Run one command against an established client and render its output.
async fn execute(command: Command, auth: Arc<AuthClient>) -> Result<String> {
    match command {
        Command::Connect => auth
            .connect_url()
            .await
            .context("failed to fetch connect URL"),
        Command::Refresh => {
            let session = auth
                .refresh_user_token()
                .await
                .context("failed to refresh user token")?;
            // The previous refresh token is now dead; the operator must keep these.
            let pair = serde_json::json!({
                "token": session.access_token().expose(),
                "refresh_token": session.refresh_token().expose(),
            });
            Ok(serde_json::to_string_pretty(&pair)?)
        }
        Command::Session => {
            let state = match auth.session_state().await {
                SessionState::NoSession => serde_json::json!({"session": "none"}),
                SessionState::AppSession => serde_json::json!({"session": "app"}),
                SessionState::UserSession { has_app_token } => {
                    serde_json::json!({"session": "user", "app_token": has_app_token})
                }
            };
            Ok(state.to_string())
        }
        Command::Raw {
            method,
            target,
            params,
        } => {
            let client = WykopClient::new(auth).await?;
            let params = command::to_params(params);
            let (data, query) = match method {
                wykop_api::Method::Get | wykop_api::Method::Delete => {
                    (wykop_api::Params::new(), params)
                }
                wykop_api::Method::Post | wykop_api::Method::Put => {
                    (params, wykop_api::Params::new())
                }
            };
            let body = client
                .raw_request(&target, method, data, query)
                .await
                .with_context(|| format!("{method} {target} failed"))?;
            match body {
                Some(body) => Ok(serde_json::to_string_pretty(&body)?),
                None => Ok(String::new()),
            }
        }
    }
}
