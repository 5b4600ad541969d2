//! Remote media lookup collaborator.
//!
//! The backend exposes `GET {base}/media/{id}` returning a descriptor with
//! a nullable direct-access URL. A missing record, a descriptor without a
//! URL, and a failed request all drive the same path: the id stays
//! unresolved and renders as unavailable. None of them is a user-facing
//! error.

use serde::Deserialize;
use thiserror::Error;

use aula_content_core::MediaKind;

use crate::config::CONFIG;

#[derive(Debug, Error)]
pub enum MediaLookupError {
    #[error("media lookup request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Asset descriptor as served by the media API.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaDescriptor {
    pub id: String,
    pub media_type: MediaKind,
    #[serde(default)]
    pub download_url: Option<String>,
}

#[derive(Clone)]
pub struct MediaClient {
    base: String,
    http: reqwest::Client,
}

impl MediaClient {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.media_api_base.clone())
    }

    /// Look up the direct URL for one media id.
    ///
    /// `Ok(None)` means the lookup settled without a usable URL (unknown id
    /// or a descriptor with a null `download_url`).
    pub async fn lookup(&self, id: &str) -> Result<Option<String>, MediaLookupError> {
        let url = format!("{}/media/{id}", self.base);
        let response = self.http.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let descriptor: MediaDescriptor = response.error_for_status()?.json().await?;
        Ok(descriptor.download_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_with_url() {
        let descriptor: MediaDescriptor = serde_json::from_str(
            r#"{"id": "abc-1", "media_type": "image", "download_url": "https://x/a.png"}"#,
        )
        .unwrap();
        assert_eq!(descriptor.id, "abc-1");
        assert_eq!(descriptor.media_type, MediaKind::Image);
        assert_eq!(descriptor.download_url.as_deref(), Some("https://x/a.png"));
    }

    #[test]
    fn test_descriptor_null_and_absent_url() {
        let null_url: MediaDescriptor =
            serde_json::from_str(r#"{"id": "v1", "media_type": "video", "download_url": null}"#)
                .unwrap();
        assert_eq!(null_url.download_url, None);

        let absent: MediaDescriptor =
            serde_json::from_str(r#"{"id": "v2", "media_type": "video"}"#).unwrap();
        assert_eq!(absent.download_url, None);
    }

    #[test]
    fn test_base_url_normalized() {
        let client = MediaClient::new("http://api.test/v1///");
        assert_eq!(client.base, "http://api.test/v1");
    }
}
