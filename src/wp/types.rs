//! Typed views of the WordPress REST API responses and the flattened
//! output record.
//!
//! Deserialization is the schema check: a listing response that does not
//! match [`MediaItem`] fails the fetch instead of silently defaulting.
//! The tolerated absences are exactly the ones the API allows: `post`
//! on a media item, `categories` and `title` on a post.

use serde::{Deserialize, Serialize};

/// A `{"rendered": "..."}` wrapper, used by WordPress for titles.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderedText {
    pub rendered: String,
}

/// One attachment from `GET /media`.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    pub id: u64,
    pub title: RenderedText,
    pub source_url: String,
    pub media_type: String,
    /// Parent post ID. Zero or absent means the attachment is unattached.
    #[serde(default)]
    pub post: Option<u64>,
}

impl MediaItem {
    /// Parent post ID, with zero normalized to "no parent".
    pub fn parent_post(&self) -> Option<u64> {
        self.post.filter(|&id| id != 0)
    }
}

/// The subset of `GET /posts/{id}` this client reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub categories: Vec<u64>,
    #[serde(default)]
    pub title: Option<RenderedText>,
}

/// A media item joined with its parent post's title and categories.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedMedia {
    pub media_id: u64,
    pub media_title: String,
    pub media_url: String,
    pub media_type: String,
    pub post_id: Option<u64>,
    pub post_title: Option<String>,
    pub categories: Vec<u64>,
}

impl std::fmt::Display for EnrichedMedia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {:?} [{}] {}",
            self.media_id, self.media_title, self.media_type, self.media_url
        )?;
        match (self.post_id, &self.post_title) {
            (Some(id), Some(title)) => write!(f, " <- post {} {:?}", id, title)?,
            (Some(id), None) => write!(f, " <- post {}", id)?,
            (None, _) => write!(f, " (unattached)")?,
        }
        write!(f, " categories={:?}", self.categories)
    }
}
