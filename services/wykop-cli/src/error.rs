//! Argument validation errors
//!
//! Returned by the `raw` value parsers; clap renders them as usage errors.
//! Everything that goes wrong after the command line is understood (config,
//! network, API) is reported through `anyhow` in `main`.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported HTTP method: {0} (expected GET, POST, PUT or DELETE)")]
    InvalidMethod(String),

    #[error("expected key=value, got: {0}")]
    InvalidParam(String),
}

/// Result alias using the CLI Error
pub type Result<T> = std::result::Result<T, Error>;
