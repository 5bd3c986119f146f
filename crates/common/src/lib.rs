//! Common types shared by the Wykop client crates

mod secret;
mod error;

pub use secret::Secret;
pub use error::{Error, Result};
