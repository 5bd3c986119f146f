//! Media uploads
//!
//! Photos are uploaded either by URL or as a multipart file and referenced
//! afterwards by the returned key. Accepted: jpeg, gif and png up to 10 MB.

use serde_json::Value;
use transport::FilePart;
use wykop_auth::{Params, Result};

use crate::WykopClient;
use crate::client::segment;
use crate::types::MediaPhotosType;

impl WykopClient {
    /// Let the server fetch a photo from `url`.
    pub async fn upload_photo_url(&self, url: &str, kind: MediaPhotosType) -> Result<Option<Value>> {
        let body = Params::new().with("url", url);
        let query = Params::new().with("type", kind.as_str());
        self.user_upload("/media/photos", body, query, Vec::new())
            .await
    }

    /// Upload photo bytes as the multipart field `file`.
    pub async fn upload_photo_file(
        &self,
        file_name: &str,
        content: Vec<u8>,
        kind: MediaPhotosType,
    ) -> Result<Option<Value>> {
        let query = Params::new().with("type", kind.as_str());
        let files = vec![FilePart::new("file", file_name, content)];
        self.user_upload("/media/photos/upload", Params::new(), query, files)
            .await
    }

    /// Owners only.
    pub async fn delete_photo(&self, key: &str) -> Result<Option<Value>> {
        self.user_delete(&format!("/media/photos/{}", segment(key))).await
    }

    /// Create an embed preview from `url`.
    pub async fn upload_embed_url(&self, url: &str) -> Result<Option<Value>> {
        self.user_post("/media/embed", Params::new().with("url", url))
            .await
    }
}
