//! User profiles and their activity lists

use serde_json::Value;
use wykop_auth::{Params, Result};

use crate::WykopClient;
use crate::client::segment;
use crate::types::Paging;

fn user_path(username: &str, rest: &str) -> String {
    format!("/profile/users/{}{}", segment(username), rest)
}

impl WykopClient {
    /// Public and private data of the logged-in user.
    pub async fn my_profile(&self) -> Result<Option<Value>> {
        self.user_get("/profile", Params::new()).await
    }

    pub async fn my_profile_short(&self) -> Result<Option<Value>> {
        self.user_get("/profile/short", Params::new()).await
    }

    pub async fn get_profile(&self, username: &str) -> Result<Option<Value>> {
        self.public_get(&user_path(username, ""), Params::new())
            .await
    }

    pub async fn get_profile_short(&self, username: &str) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/short"), Params::new())
            .await
    }

    /// Entries and links authored by the user.
    pub async fn profile_actions(&self, username: &str) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/actions"), Params::new())
            .await
    }

    pub async fn profile_entries_added(&self, username: &str, paging: &Paging) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/entries/added"), paging.to_params())
            .await
    }

    pub async fn profile_entries_voted(&self, username: &str, paging: &Paging) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/entries/voted"), paging.to_params())
            .await
    }

    pub async fn profile_entries_commented(
        &self,
        username: &str,
        paging: &Paging,
    ) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/entries/commented"), paging.to_params())
            .await
    }

    pub async fn profile_links_added(&self, username: &str, paging: &Paging) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/links/added"), paging.to_params())
            .await
    }

    /// Links by the user that reached the front page.
    pub async fn profile_links_published(
        &self,
        username: &str,
        paging: &Paging,
    ) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/links/published"), paging.to_params())
            .await
    }

    pub async fn profile_links_up(&self, username: &str, paging: &Paging) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/links/up"), paging.to_params())
            .await
    }

    /// Down votes are private: only visible to the logged-in user.
    pub async fn profile_links_down(&self, username: &str, paging: &Paging) -> Result<Option<Value>> {
        self.user_get(&user_path(username, "/links/down"), paging.to_params())
            .await
    }

    pub async fn profile_links_commented(
        &self,
        username: &str,
        paging: &Paging,
    ) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/links/commented"), paging.to_params())
            .await
    }

    pub async fn profile_links_related(&self, username: &str, paging: &Paging) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/links/related"), paging.to_params())
            .await
    }

    pub async fn profile_badges(&self, username: &str) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/badges"), Params::new())
            .await
    }

    /// Author tags owned by the user.
    pub async fn profile_tags(&self, username: &str) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/tags"), Params::new())
            .await
    }

    pub async fn profile_observed_tags(&self, username: &str) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/observed/tags"), Params::new())
            .await
    }

    pub async fn profile_following(&self, username: &str) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/observed/users/following"), Params::new())
            .await
    }

    pub async fn profile_followers(&self, username: &str) -> Result<Option<Value>> {
        self.public_get(&user_path(username, "/observed/users/followers"), Params::new())
            .await
    }
}
