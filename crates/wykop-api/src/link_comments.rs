//! Comments under links

use serde_json::Value;
use wykop_auth::{Params, Result};

use crate::WykopClient;
use crate::types::{ContentInput, LinkCommentSortType, LinkCommentVoteType, Paging};

impl WykopClient {
    pub async fn list_link_comments(
        &self,
        link_id: u64,
        sort: LinkCommentSortType,
        paging: &Paging,
    ) -> Result<Option<Value>> {
        let query = paging.to_params().with("sort", sort.as_str());
        self.public_get(&format!("/links/{link_id}/comments"), query)
            .await
    }

    pub async fn create_link_comment(
        &self,
        link_id: u64,
        input: &ContentInput,
    ) -> Result<Option<Value>> {
        self.user_post(&format!("/links/{link_id}/comments"), input.to_params())
            .await
    }

    /// Reply to an existing comment.
    pub async fn reply_to_link_comment(
        &self,
        link_id: u64,
        comment_id: u64,
        input: &ContentInput,
    ) -> Result<Option<Value>> {
        let path = format!("/links/{link_id}/comments/{comment_id}");
        self.user_post(&path, input.to_params()).await
    }

    pub async fn update_link_comment(
        &self,
        link_id: u64,
        comment_id: u64,
        input: &ContentInput,
    ) -> Result<Option<Value>> {
        let path = format!("/links/{link_id}/comments/{comment_id}");
        self.user_put(&path, input.to_params()).await
    }

    pub async fn delete_link_comment(&self, link_id: u64, comment_id: u64) -> Result<Option<Value>> {
        self.user_delete(&format!("/links/{link_id}/comments/{comment_id}"))
            .await
    }

    pub async fn vote_link_comment(
        &self,
        link_id: u64,
        comment_id: u64,
        vote: LinkCommentVoteType,
    ) -> Result<Option<Value>> {
        let path = format!(
            "/links/{link_id}/comments/{comment_id}/votes/{}",
            vote.as_str()
        );
        self.user_post(&path, Params::new()).await
    }

    pub async fn revoke_link_comment_vote(
        &self,
        link_id: u64,
        comment_id: u64,
    ) -> Result<Option<Value>> {
        self.user_delete(&format!("/links/{link_id}/comments/{comment_id}/votes"))
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
    async fn list_comments_defaults_to_newest() {
        let mock = Arc::new(MockTransport::new());
        mock.route(Method::Get, "/links/3/comments", 200, r#"{"data":[]}"#);
        let client = app_client(&mock).await;

        client
            .list_link_comments(3, LinkCommentSortType::default(), &Paging::page("2"))
            .await
            .unwrap();

        let sent = mock.last_request().unwrap();
        assert_eq!(
            sent.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("sort".to_string(), "newest".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn reply_posts_to_comment_url() {
        let mock = Arc::new(MockTransport::new());
        mock.route(Method::Post, "/links/3/comments/11", 200, r#"{"data":{"id":12}}"#);
        let client = user_client(&mock).await;

        client
            .reply_to_link_comment(3, 11, &ContentInput::text("agreed"))
            .await
            .unwrap();

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(
            sent.json.unwrap(),
            serde_json::json!({"data": {"content": "agreed"}})
        );
    }

    #[tokio::test]
    async fn vote_type_is_a_path_segment() {
        let mock = Arc::new(MockTransport::new());
        mock.route(Method::Post, "/links/3/comments/11/votes/down", 204, "");
        mock.route(Method::Delete, "/links/3/comments/11/votes", 204, "");
        let client = user_client(&mock).await;

        client
            .vote_link_comment(3, 11, LinkCommentVoteType::Down)
            .await
            .unwrap();
        client.revoke_link_comment_vote(3, 11).await.unwrap();

        let methods: Vec<Method> = mock.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec![Method::Post, Method::Delete]);
    }

    #[tokio::test]
    async fn edits_require_user_session() {
        let mock = Arc::new(MockTransport::new());
        let client = app_client(&mock).await;
        let before = mock.call_count();

        let input = ContentInput::text("x");
        assert!(client.create_link_comment(1, &input).await.is_err());
        assert!(client.update_link_comment(1, 2, &input).await.is_err());
        assert!(client.delete_link_comment(1, 2).await.is_err());

        assert_eq!(mock.call_count(), before);
    }
}
