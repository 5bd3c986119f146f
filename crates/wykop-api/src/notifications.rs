//! Notifications
//!
//! Two feeds: entry notifications (mentions, replies) and private-message
//! notifications. Every call is user-scoped.

use serde_json::Value;
use wykop_auth::{Params, Result};

use crate::WykopClient;
use crate::client::segment;

impl WykopClient {
    /// Whether the user has unread notifications.
    pub async fn notifications_status(&self) -> Result<Option<Value>> {
        self.user_get("/notifications/status", Params::new()).await
    }

    pub async fn list_entry_notifications(&self) -> Result<Option<Value>> {
        self.user_get("/notifications/entries", Params::new()).await
    }

    pub async fn mark_all_entry_notifications_read(&self) -> Result<Option<Value>> {
        self.user_put("/notifications/entries/all", Params::new())
            .await
    }

    pub async fn delete_all_entry_notifications(&self) -> Result<Option<Value>> {
        self.user_delete("/notifications/entries/all").await
    }

    pub async fn get_entry_notification(&self, id: &str) -> Result<Option<Value>> {
        self.user_get(&format!("/notifications/entries/{}", segment(id)), Params::new())
            .await
    }

    pub async fn mark_entry_notification_read(&self, id: &str) -> Result<Option<Value>> {
        self.user_put(&format!("/notifications/entries/{}", segment(id)), Params::new())
            .await
    }

    pub async fn delete_entry_notification(&self, id: &str) -> Result<Option<Value>> {
        self.user_delete(&format!("/notifications/entries/{}", segment(id)))
            .await
    }

    pub async fn list_pm_notifications(&self) -> Result<Option<Value>> {
        self.user_get("/notifications/pm", Params::new()).await
    }

    pub async fn mark_all_pm_notifications_read(&self) -> Result<Option<Value>> {
        self.user_put("/notifications/pm/all", Params::new()).await
    }

    pub async fn delete_all_pm_notifications(&self) -> Result<Option<Value>> {
        self.user_delete("/notifications/pm/all").await
    }

    pub async fn get_pm_notification(&self, id: &str) -> Result<Option<Value>> {
        self.user_get(&format!("/notifications/pm/{}", segment(id)), Params::new())
            .await
    }

    pub async fn mark_pm_notification_read(&self, id: &str) -> Result<Option<Value>> {
        self.user_put(&format!("/notifications/pm/{}", segment(id)), Params::new())
            .await
    }

    pub async fn delete_pm_notification(&self, id: &str) -> Result<Option<Value>> {
        self.user_delete(&format!("/notifications/pm/{}", segment(id))).await
    }
}
