//! Wykop API authentication and request dispatch
//!
//! Everything below the endpoint catalog: the credential store, the
//! application/user token lifecycle, and the dispatcher that turns a prepared
//! call into one HTTP round trip with a typed outcome.
//!
//! Credential flow:
//! 1. `AuthClient::authenticate_app()` exchanges key+secret for an app token
//! 2. `AuthClient::connect_url()` hands out the browser authorization URL
//! 3. The user's access/refresh pair comes back out of band and is installed
//!    with `AuthClient::authenticate_user()`
//! 4. `AuthClient::refresh_user_token()` renews the pair when it expires

pub mod constants;
pub mod credentials;
pub mod dispatcher;
pub mod error;
pub mod guard;
pub mod metrics;
pub mod session;
pub mod token;

pub use constants::*;
pub use credentials::{CredentialStore, UserSession};
pub use dispatcher::{Dispatcher, Params};
pub use error::{Error, Result};
pub use session::{AuthClient, SessionState};
