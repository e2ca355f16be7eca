//! Minimal client for the Supabase Storage REST API.
//!
//! Only the three operations the bot needs are implemented: creating a
//! bucket, uploading an object, and deriving an object's public URL. Every
//! request authenticates with the service key through both the
//! `Authorization: Bearer` and `apikey` headers.

pub mod icons;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::storage::StorageError;

#[derive(Debug, Serialize)]
struct CreateBucketRequest<'a> {
    id: &'a str,
    name: &'a str,
    public: bool,
    allowed_mime_types: &'a [&'a str],
}

/// Error body the storage API returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// HTTP client for one storage deployment.
#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base: Url,
    key: String,
}

impl StorageClient {
    pub fn new(http: reqwest::Client, base: Url, key: String) -> Self {
        Self { http, base, key }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/{}",
            self.base.as_str().trim_end_matches('/'),
            path
        )
    }

    /// Creates a bucket.
    ///
    /// Fails with an API error carrying code `Duplicate` when the bucket
    /// already exists; callers that tolerate re-creation check
    /// [`StorageError::is_duplicate`].
    pub async fn create_bucket(
        &self,
        id: &str,
        public: bool,
        allowed_mime_types: &[&str],
    ) -> Result<(), StorageError> {
        let response = self
            .http
            .post(self.endpoint("bucket"))
            .header("Authorization", format!("Bearer {}", self.key))
            .header("apikey", &self.key)
            .json(&CreateBucketRequest {
                id,
                name: id,
                public,
                allowed_mime_types,
            })
            .send()
            .await?;

        check(response).await
    }

    /// Uploads an object, overwriting any existing object with the same name.
    pub async fn upload(
        &self,
        bucket: &str,
        name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        let response = self
            .http
            .post(self.endpoint(&format!("object/{bucket}/{name}")))
            .header("Authorization", format!("Bearer {}", self.key))
            .header("apikey", &self.key)
            .header("Content-Type", content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await?;

        check(response).await
    }

    /// The unauthenticated URL an object in a public bucket is served from.
    pub fn public_url(&self, bucket: &str, name: &str) -> String {
        self.endpoint(&format!("object/public/{bucket}/{name}"))
    }
}

/// Turns a non-success response into a structured API error.
async fn check(response: reqwest::Response) -> Result<(), StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }

    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<ApiErrorBody>(&text).ok();

    Err(StorageError::Api {
        status: status.as_u16(),
        code: body.as_ref().and_then(|b| b.error.clone()).unwrap_or_default(),
        message: body.and_then(|b| b.message).unwrap_or(text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base: &str) -> StorageClient {
        StorageClient::new(
            reqwest::Client::new(),
            Url::parse(base).expect("Failed to parse test base URL"),
            "service-key".to_string(),
        )
    }

    #[test]
    fn test_public_url_layout() {
        let client = test_client("https://abc.supabase.co");
        assert_eq!(
            client.public_url("icons", "music.png"),
            "https://abc.supabase.co/storage/v1/object/public/icons/music.png"
        );
    }

    #[test]
    fn test_public_url_tolerates_trailing_slash_in_base() {
        let client = test_client("https://abc.supabase.co/");
        assert_eq!(
            client.public_url("icons", "music.png"),
            "https://abc.supabase.co/storage/v1/object/public/icons/music.png"
        );
    }

    #[test]
    fn test_create_bucket_request_shape() {
        let request = CreateBucketRequest {
            id: "icons",
            name: "icons",
            public: true,
            allowed_mime_types: &["image/png"],
        };

        let json = serde_json::to_value(&request).expect("Failed to serialize request");
        assert_eq!(
            json,
            serde_json::json!({
                "id": "icons",
                "name": "icons",
                "public": true,
                "allowed_mime_types": ["image/png"],
            })
        );
    }

    #[test]
    fn test_api_error_body_parsing() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"statusCode": "409", "error": "Duplicate", "message": "The resource already exists"}"#,
        )
        .expect("Failed to parse error body");

        assert_eq!(body.error.as_deref(), Some("Duplicate"));
        assert_eq!(body.message.as_deref(), Some("The resource already exists"));
    }
}
