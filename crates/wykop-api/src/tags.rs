//! Tags, tag streams and articles
//!
//! A tag stream mixes entries and links; `type` narrows it to one kind.

use serde_json::Value;
use wykop_auth::{Params, Result};

use crate::WykopClient;
use crate::client::segment;
use crate::types::StreamQuery;

impl WykopClient {
    pub async fn popular_tags(&self) -> Result<Option<Value>> {
        self.public_get("/tags/popular", Params::new()).await
    }

    /// Popular author tags (at most 10).
    pub async fn popular_user_tags(&self) -> Result<Option<Value>> {
        self.public_get("/tags/popular-user-tags", Params::new())
            .await
    }

    /// Related tags (at most 10).
    pub async fn related_tags(&self, tag: &str) -> Result<Option<Value>> {
        self.public_get(&format!("/tags/{}/related", segment(tag)), Params::new())
            .await
    }

    pub async fn get_tag(&self, tag: &str) -> Result<Option<Value>> {
        self.public_get(&format!("/tags/{}", segment(tag)), Params::new()).await
    }

    /// Tag owners only: change the background (base64) and description.
    pub async fn edit_tag(&self, tag: &str, photo: &str, description: &str) -> Result<Option<Value>> {
        let body = Params::new()
            .with("photo", photo)
            .with("description", description);
        self.user_put(&format!("/tags/{}", segment(tag)), body).await
    }

    pub async fn tag_stream(&self, tag: &str, query: &StreamQuery) -> Result<Option<Value>> {
        self.public_get(&format!("/tags/{}/stream", segment(tag)), query.to_params())
            .await
    }

    pub async fn tag_owners(&self, tag: &str) -> Result<Option<Value>> {
        self.public_get(&format!("/tags/{}/users", segment(tag)), Params::new())
            .await
    }

    /// Articles under a tag.
    pub async fn list_articles_by_tag(&self, tag: &str, query: &StreamQuery) -> Result<Option<Value>> {
        let params = query.to_params().with("type", "article");
        self.public_get(&format!("/tags/{}/stream", segment(tag)), params).await
    }

    pub async fn get_article(&self, article_id: u64) -> Result<Option<Value>> {
        self.public_get(&format!("/articles/{article_id}"), Params::new())
            .await
    }
}
