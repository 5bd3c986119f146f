//! Private messages

use serde_json::Value;
use wykop_auth::{Params, Result};

use crate::WykopClient;
use crate::client::segment;

impl WykopClient {
    /// Conversations, optionally filtered by a username fragment (min. 3 chars).
    pub async fn list_conversations(&self, username: Option<&str>) -> Result<Option<Value>> {
        self.user_get("/pm/conversations", Params::new().with("query", username))
            .await
    }

    /// Messages exchanged with `username`.
    ///
    /// `prev_message`/`next_message` are message keys to page backwards or
    /// forwards from.
    pub async fn get_conversation(
        &self,
        username: &str,
        prev_message: Option<&str>,
        next_message: Option<&str>,
    ) -> Result<Option<Value>> {
        let query = Params::new()
            .with("prev_message", prev_message)
            .with("next_message", next_message);
        self.user_get(&format!("/pm/conversations/{}", segment(username)), query)
            .await
    }

    pub async fn send_pm(
        &self,
        username: &str,
        content: &str,
        photo: Option<&str>,
        embed: Option<&str>,
    ) -> Result<Option<Value>> {
        let body = Params::new()
            .with("content", content)
            .with("photo", photo)
            .with("embed", embed);
        self.user_post(&format!("/pm/conversations/{}", segment(username)), body)
            .await
    }

    /// Removes the conversation for the caller only.
    pub async fn delete_conversation(&self, username: &str) -> Result<Option<Value>> {
        self.user_delete(&format!("/pm/conversations/{}", segment(username)))
            .await
    }

    pub async fn mark_all_pms_read(&self) -> Result<Option<Value>> {
        self.user_put("/pm/read-all", Params::new()).await
    }
}
