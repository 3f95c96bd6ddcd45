//! WordPress REST API surface.
//!
//! - [`client`] -- Typed HTTP client for the media and post endpoints.
//! - [`types`] -- Response shapes and the flattened output record.

pub mod client;
pub mod types;

pub use client::WpClient;
pub use types::{EnrichedMedia, MediaItem, Post, RenderedText};
