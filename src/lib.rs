//! wpmedia - WordPress media attachment enrichment client
//!
//! Fetches a page of media attachments from a WordPress-compatible REST
//! API and joins each with the categories and title of its parent post.

pub mod config;
pub mod enrich;
pub mod error;
pub mod wp;

pub use enrich::MediaEnricher;
pub use error::{Error, Result};
pub use wp::{EnrichedMedia, WpClient};
