//! HTTP client for a WordPress-compatible REST API (`wp-json/wp/v2`).

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};
use crate::wp::types::{MediaItem, Post};

/// Client for the two endpoints this tool consumes: the media listing
/// and individual post lookups.
pub struct WpClient {
    client: reqwest::Client,
    base_url: String,
}

impl WpClient {
    /// Create a client for the given API base, e.g.
    /// `https://example.com/wp-json/wp/v2`.
    ///
    /// Every request carries the given timeout; a non-responding server
    /// surfaces as [`Error::Timeout`] instead of hanging the run.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(&url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url, status });
        }

        resp.json::<T>()
            .await
            .map_err(|e| Error::Malformed { url, source: e })
    }

    /// Fetch one page of media attachments.
    pub async fn list_media(&self, per_page: u32) -> Result<Vec<MediaItem>> {
        self.get_json(&format!("/media?per_page={per_page}")).await
    }

    /// Fetch a single post by ID.
    pub async fn get_post(&self, post_id: u64) -> Result<Post> {
        self.get_json(&format!("/posts/{post_id}")).await
    }
}
