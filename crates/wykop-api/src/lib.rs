//! Wykop API v3 endpoint catalog
//!
//! One async method per endpoint on `WykopClient`, grouped by resource area.
//! Each method is a single round trip through the `wykop-auth` dispatcher and
//! returns the decoded JSON body, or `None` when the API answers with no
//! content.
//!
//! ```no_run
//! # async fn demo() -> wykop_api::Result<()> {
//! use std::sync::Arc;
//! use wykop_api::{AuthClient, EntriesLastUpdate, EntriesSortType, Paging, WykopClient};
//!
//! let auth = Arc::new(AuthClient::new(Arc::new(transport::ReqwestTransport::default())));
//! auth.authenticate_app("key", "secret").await?;
//! let client = WykopClient::new(auth).await?;
//! let hot = client
//!     .list_entries(EntriesSortType::Hot, EntriesLastUpdate::Six, &Paging::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

mod drafts;
mod entries;
mod entry_comments;
mod link_comments;
mod links;
mod media;
mod notifications;
mod pms;
mod profiles;
mod tags;

#[cfg(test)]
mod testing;

pub use client::WykopClient;
pub use transport::Method;
pub use types::*;
pub use wykop_auth::{AuthClient, Error, Params, Result, SessionState, UserSession};
