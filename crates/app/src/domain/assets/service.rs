//! Asset store service.
//!
//! Image storage is delegated to an external asset host over HTTP. Uploads
//! are posted as multipart forms; the host answers with the public URL of
//! the stored image. Failures are reported once, with no retry.

use async_trait::async_trait;
use mockall::automock;
use reqwest::multipart;
use serde::Deserialize;

use crate::domain::assets::{
    data::{ImageUpload, StoredImage},
    errors::AssetStoreError,
};

/// Asset host connection settings.
#[derive(Debug, Clone)]
pub struct AssetHostConfig {
    /// Base URL of the asset host API.
    pub base_url: String,

    /// Bearer key for the asset host API.
    pub api_key: String,
}

/// Wire shape of the asset host's upload response.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

#[derive(Debug, Clone)]
pub struct HttpAssetStore {
    client: reqwest::Client,
    config: AssetHostConfig,
}

impl HttpAssetStore {
    #[must_use]
    pub fn new(config: AssetHostConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl AssetStore for HttpAssetStore {
    async fn store_image(&self, upload: ImageUpload) -> Result<StoredImage, AssetStoreError> {
        let file_name = upload.file_name.unwrap_or_else(|| "upload".to_string());

        let form = multipart::Form::new()
            .part("image", multipart::Part::bytes(upload.bytes).file_name(file_name));

        let response = self
            .client
            .post(format!("{}/images", self.config.base_url.trim_end_matches('/')))
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssetStoreError::Rejected(response.status().as_u16()));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(AssetStoreError::InvalidResponse)?;

        Ok(StoredImage { url: body.url })
    }
}

#[automock]
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Stores an image with the asset host and returns its hosted URL.
    async fn store_image(&self, upload: ImageUpload) -> Result<StoredImage, AssetStoreError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn upload_response_parses_hosted_url() -> TestResult {
        let body: UploadResponse =
            serde_json::from_str(r#"{"url":"https://assets.example.com/abc.png"}"#)?;

        assert_eq!(body.url, "https://assets.example.com/abc.png");

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_asset_host_reports_upstream_error() {
        // Port 1 on loopback refuses connections immediately.
        let store = HttpAssetStore::new(AssetHostConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: "test".to_string(),
        });

        let result = store
            .store_image(ImageUpload {
                file_name: None,
                bytes: vec![0u8; 4],
            })
            .await;

        assert!(
            matches!(result, Err(AssetStoreError::Upstream(_))),
            "expected Upstream, got {result:?}"
        );
    }
}
