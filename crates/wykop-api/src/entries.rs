//! Microblog entries

use serde_json::Value;
use wykop_auth::{Params, Result};

use crate::WykopClient;
use crate::client::segment;
use crate::types::{ContentInput, EntriesLastUpdate, EntriesSortType, Paging, StreamQuery};

impl WykopClient {
    pub async fn create_entry(&self, input: &ContentInput) -> Result<Option<Value>> {
        self.user_post("/entries", input.to_params()).await
    }

    /// `last_update` only applies to `EntriesSortType::Hot`.
    pub async fn list_entries(
        &self,
        sort: EntriesSortType,
        last_update: EntriesLastUpdate,
        paging: &Paging,
    ) -> Result<Option<Value>> {
        let query = paging
            .to_params()
            .with("sort", sort.as_str())
            .with("last_update", last_update.hours());
        self.public_get("/entries", query).await
    }

    pub async fn list_entries_by_tag(&self, tag: &str, query: &StreamQuery) -> Result<Option<Value>> {
        let params = query.to_params().with("type", "entry");
        self.public_get(&format!("/tags/{}/stream", segment(tag)), params).await
    }

    pub async fn get_entry(&self, entry_id: u64) -> Result<Option<Value>> {
        self.public_get(&format!("/entries/{entry_id}"), Params::new())
            .await
    }

    pub async fn update_entry(&self, entry_id: u64, input: &ContentInput) -> Result<Option<Value>> {
        self.user_put(&format!("/entries/{entry_id}"), input.to_params())
            .await
    }

    pub async fn delete_entry(&self, entry_id: u64) -> Result<Option<Value>> {
        self.user_delete(&format!("/entries/{entry_id}")).await
    }

    pub async fn vote_entry(&self, entry_id: u64) -> Result<Option<Value>> {
        self.user_post(&format!("/entries/{entry_id}/votes"), Params::new())
            .await
    }

    pub async fn revoke_entry_vote(&self, entry_id: u64) -> Result<Option<Value>> {
        self.user_delete(&format!("/entries/{entry_id}/votes")).await
    }
}
