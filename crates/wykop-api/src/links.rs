//! Links (znaleziska)

use serde_json::Value;
use wykop_auth::{Params, Result};

use crate::WykopClient;
use crate::types::{LinkType, LinkUpdate, LinkVoteDownReason, Paging};

impl WykopClient {
    /// Front page or upcoming links.
    pub async fn list_links(&self, kind: LinkType, paging: &Paging) -> Result<Option<Value>> {
        let query = paging.to_params().with("type", kind.as_str());
        self.public_get("/links", query).await
    }

    pub async fn get_link(&self, link_id: u64) -> Result<Option<Value>> {
        self.public_get(&format!("/links/{link_id}"), Params::new())
            .await
    }

    /// Edit one of the caller's own links. Only allowed within 15 minutes of
    /// posting and while the link is not on the front page.
    pub async fn update_link(&self, link_id: u64, update: &LinkUpdate) -> Result<Option<Value>> {
        self.user_post(&format!("/links/{link_id}"), update.to_params())
            .await
    }

    pub async fn delete_link(&self, link_id: u64) -> Result<Option<Value>> {
        self.user_delete(&format!("/links/{link_id}")).await
    }

    pub async fn vote_up_link(&self, link_id: u64) -> Result<Option<Value>> {
        self.user_post(&format!("/links/{link_id}/votes/up"), Params::new())
            .await
    }

    pub async fn vote_down_link(
        &self,
        link_id: u64,
        reason: LinkVoteDownReason,
    ) -> Result<Option<Value>> {
        let path = format!("/links/{link_id}/votes/down/{}", reason.value());
        self.user_post(&path, Params::new()).await
    }

    /// Withdraw an up or down vote.
    pub async fn revoke_link_vote(&self, link_id: u64) -> Result<Option<Value>> {
        self.user_delete(&format!("/links/{link_id}/votes")).await
    }
}
