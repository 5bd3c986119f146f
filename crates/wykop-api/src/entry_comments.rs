//! Comments under microblog entries

use serde_json::Value;
use wykop_auth::{Params, Result};

use crate::WykopClient;
use crate::types::{ContentInput, Paging};

impl WykopClient {
    pub async fn list_entry_comments(&self, entry_id: u64, paging: &Paging) -> Result<Option<Value>> {
        self.public_get(&format!("/entries/{entry_id}/comments"), paging.to_params())
            .await
    }

    pub async fn create_entry_comment(
        &self,
        entry_id: u64,
        input: &ContentInput,
    ) -> Result<Option<Value>> {
        self.user_post(&format!("/entries/{entry_id}/comments"), input.to_params())
            .await
    }

    pub async fn update_entry_comment(
        &self,
        entry_id: u64,
        comment_id: u64,
        input: &ContentInput,
    ) -> Result<Option<Value>> {
        let path = format!("/entries/{entry_id}/comments/{comment_id}");
        self.user_put(&path, input.to_params()).await
    }

    pub async fn delete_entry_comment(&self, entry_id: u64, comment_id: u64) -> Result<Option<Value>> {
        self.user_delete(&format!("/entries/{entry_id}/comments/{comment_id}"))
            .await
    }

    pub async fn vote_entry_comment(&self, entry_id: u64, comment_id: u64) -> Result<Option<Value>> {
        let path = format!("/entries/{entry_id}/comments/{comment_id}/votes");
        self.user_post(&path, Params::new()).await
    }

    pub async fn revoke_entry_comment_vote(
        &self,
        entry_id: u64,
        comment_id: u64,
    ) -> Result<Option<Value>> {
        self.user_delete(&format!("/entries/{entry_id}/comments/{comment_id}/votes"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{app_client, user_client};
    use std::sync::Arc;
    use transport::{Method, MockTransport};

    #[tokio::test]
    async fn list_comments_without_paging_sends_empty_query() {
        let mock = Arc::new(MockTransport::new());
        mock.route(Method::Get, "/entries/5/comments", 200, r#"{"data":[]}"#);
        let client = app_client(&mock).await;

        client
            .list_entry_comments(5, &Paging::default())
            .await
            .unwrap();

        assert!(mock.last_request().unwrap().query.is_empty());
    }

    #[tokio::test]
    async fn update_comment_with_only_photo() {
        let mock = Arc::new(MockTransport::new());
        mock.route(Method::Put, "/entries/5/comments/6", 200, r#"{"data":{"id":6}}"#);
        let client = user_client(&mock).await;

        let input = ContentInput {
            photo: Some("photo-key".into()),
            ..ContentInput::default()
        };
        client.update_entry_comment(5, 6, &input).await.unwrap();

        assert_eq!(
            mock.last_request().unwrap().json.unwrap(),
            serde_json::json!({"data": {"photo": "photo-key"}})
        );
    }

    #[tokio::test]
    async fn vote_and_revoke_hit_the_same_resource() {
        let mock = Arc::new(MockTransport::new());
        mock.route(Method::Post, "/entries/5/comments/6/votes", 204, "");
        mock.route(Method::Delete, "/entries/5/comments/6/votes", 204, "");
        let client = user_client(&mock).await;

        assert!(client.vote_entry_comment(5, 6).await.unwrap().is_none());
        assert!(client.revoke_entry_comment_vote(5, 6).await.unwrap().is_none());

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, requests[1].url);
    }
}
