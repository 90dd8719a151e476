//! TMDB image URL resolution
//!
//! Resolves poster paths to sized image URLs. No fetching happens here;
//! the resolved URL is handed to whatever displays the artwork.

use serde::{Deserialize, Serialize};

/// Default TMDB image CDN base
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Poster sizes TMDB serves, smallest first
pub const DEFAULT_POSTER_SIZES: &[&str] = &["w92", "w154", "w185", "w342", "w500", "w780", "original"];

/// Builds poster URLs from TMDB image paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmdbImageUrlProvider {
    base_url: String,
    poster_sizes: Vec<String>,
}

impl Default for TmdbImageUrlProvider {
    fn default() -> Self {
        Self::new(
            TMDB_IMAGE_BASE_URL,
            DEFAULT_POSTER_SIZES.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl TmdbImageUrlProvider {
    pub fn new(base_url: impl Into<String>, poster_sizes: Vec<String>) -> Self {
        Self {
            base_url: base_url.into(),
            poster_sizes,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a poster at least `width` pixels wide
    pub fn poster_url(&self, path: &str, width: u32) -> String {
        let size = select_size(&self.poster_sizes, width);
        format!("{}{}{}", self.base_url, size, path)
    }
}

/// First `wNNN` size at least `width` wide, else the last (largest) size
fn select_size(sizes: &[String], width: u32) -> &str {
    sizes
        .iter()
        .find(|size| size_width(size).is_some_and(|w| w >= width))
        .or(sizes.last())
        .map(String::as_str)
        .unwrap_or("original")
}

fn size_width(size: &str) -> Option<u32> {
    size.strip_prefix('w')?.parse().ok()
}
