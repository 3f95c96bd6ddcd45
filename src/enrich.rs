//! Joining media attachments with their parent posts.
//!
//! The [`MediaEnricher`] fetches one page of media attachments and, for
//! each item that references a parent post, fetches that post and folds
//! its categories and rendered title into a flattened [`EnrichedMedia`]
//! record.

use tracing::{debug, info};

use crate::error::Result;
use crate::wp::{EnrichedMedia, WpClient};

/// Service that enriches media attachments with category metadata
/// inherited from their parent posts.
pub struct MediaEnricher {
    client: WpClient,
}

impl MediaEnricher {
    /// Create a new `MediaEnricher` over the given API client.
    pub fn new(client: WpClient) -> Self {
        Self { client }
    }

    /// Fetch one page of media attachments and join each with its parent
    /// post's categories and title.
    ///
    /// Lookups run strictly in listing order, one at a time; an item with
    /// no parent reference (absent or zero) triggers no post fetch and
    /// gets empty categories and no post title. Items sharing a parent
    /// each trigger their own lookup.
    ///
    /// Results come back as one ordered batch, the Kth record matching
    /// the Kth item of the listing.
    ///
    /// # Errors
    ///
    /// Any transport, status, or parse failure on either endpoint aborts
    /// the whole run; there is no per-item recovery, and no records are
    /// returned for a partially processed page.
    pub async fn fetch_media_with_categories(&self, per_page: u32) -> Result<Vec<EnrichedMedia>> {
        info!(per_page, "Fetching media listing");
        let media_items = self.client.list_media(per_page).await?;
        info!(count = media_items.len(), "Fetched media listing");

        let mut results = Vec::with_capacity(media_items.len());

        for media in media_items {
            let post_id = media.parent_post();

            let (categories, post_title) = match post_id {
                Some(id) => {
                    debug!(media_id = media.id, post_id = id, "Fetching parent post");
                    let post = self.client.get_post(id).await?;
                    (post.categories, post.title.map(|t| t.rendered))
                }
                None => {
                    debug!(media_id = media.id, "No parent post; skipping lookup");
                    (Vec::new(), None)
                }
            };

            results.push(EnrichedMedia {
                media_id: media.id,
                media_title: media.title.rendered,
                media_url: media.source_url,
                media_type: media.media_type,
                post_id,
                post_title,
                categories,
            });
        }

        info!(count = results.len(), "Enrichment complete");
        Ok(results)
    }
}
