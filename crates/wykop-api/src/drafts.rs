//! Link drafts
//!
//! Adding a link is two steps: post the URL to get a draft key, then publish
//! the draft with its metadata. Drafts expire after 24 hours.

use serde_json::Value;
use wykop_auth::{Params, Result};

use crate::WykopClient;
use crate::client::segment;
use crate::types::{DraftUpdate, LinkUpdate};

impl WykopClient {
    pub async fn list_drafts(&self) -> Result<Option<Value>> {
        self.user_get("/links/draft", Params::new()).await
    }

    /// Step one: create a draft from a URL. The response carries the draft key.
    pub async fn create_draft(&self, url: &str) -> Result<Option<Value>> {
        self.user_post("/links/draft", Params::new().with("url", url))
            .await
    }

    /// Step two: publish the draft.
    pub async fn publish_draft(&self, key: &str, link: &LinkUpdate) -> Result<Option<Value>> {
        let body = link.to_params().with("selected_image", 1);
        self.user_post(&format!("/links/draft/{}", segment(key)), body).await
    }

    pub async fn update_draft(&self, key: &str, update: &DraftUpdate) -> Result<Option<Value>> {
        let body = update.to_params().with("selected_image", 1);
        self.user_put(&format!("/links/draft/{}", segment(key)), body).await
    }

    pub async fn get_draft(&self, key: &str) -> Result<Option<Value>> {
        self.user_get(&format!("/links/draft/{}", segment(key)), Params::new())
            .await
    }

    pub async fn delete_draft(&self, key: &str) -> Result<Option<Value>> {
        self.user_delete(&format!("/links/draft/{}", segment(key))).await
    }
}
