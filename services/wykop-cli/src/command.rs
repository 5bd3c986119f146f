//! Command-line arguments

use clap::{Parser, Subcommand};
use serde_json::Value;
use wykop_api::{Method, Params};

use crate::error::{Error, Result};

/// Wykop API v3 command-line client
#[derive(Parser, Debug)]
#[command(name = "wykop", version)]
#[command(about = "Command-line client for the Wykop API v3", long_about = None)]
#[command(
    after_help = "Credentials: WYKOP_APP_KEY, WYKOP_APP_SECRET, WYKOP_USER_TOKEN, WYKOP_USER_REFRESH_TOKEN"
)]
pub struct Cli {
    /// Path to the TOML config file (default: wykop.toml)
    #[arg(long, global = true, env = "CONFIG_PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the browser authorization URL
    Connect,

    /// Refresh the user token pair and print it
    Refresh,

    /// Print which credentials are held
    Session,

    /// Send a raw request (GET/DELETE params go to the query string, others to the body)
    Raw {
        /// HTTP method: GET, POST, PUT or DELETE
        #[arg(value_parser = parse_method)]
        method: Method,

        /// Absolute URL or path relative to the API base URL
        target: String,

        /// Parameters as key=value; JSON literals keep their type
        #[arg(value_parser = parse_param)]
        params: Vec<(String, Value)>,
    },
}

/// Collect `key=value` pairs into request parameters.
pub fn to_params(pairs: Vec<(String, Value)>) -> Params {
    let mut params = Params::new();
    for (key, value) in pairs {
        params.insert(&key, value);
    }
    params
}

fn parse_method(method: &str) -> Result<Method> {
    match method.to_ascii_uppercase().as_str() {
        "GET" => Ok(Method::Get),
        "POST" => Ok(Method::Post),
        "PUT" => Ok(Method::Put),
        "DELETE" => Ok(Method::Delete),
        _ => Err(Error::InvalidMethod(method.to_string())),
    }
}

fn parse_param(pair: &str) -> Result<(String, Value)> {
    let (key, value) = pair
        .split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| Error::InvalidParam(pair.to_string()))?;
    Ok((key.to_string(), parse_value(value)))
}

/// JSON literals (`true`, `12`, `["a","b"]`) keep their type; anything else is a string.
fn parse_value(value: &str) -> Value {
    serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
}
