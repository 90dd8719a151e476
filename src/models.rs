//! Data structures for show details
//!
//! - **Shows**: `ShowRecord`, the immutable show entry fed to the details list
//! - **Catalog**: `ShowCatalog`, a JSON-backed store with a related-show index

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Demo catalog bundled into the binary
const DEMO_CATALOG: &str = include_str!("../demos/shows.json");

// =============================================================================
// Show Models
// =============================================================================

/// A single show entry.
///
/// Every field is optional: partially synced shows are common and the
/// details list renders whatever is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowRecord {
    #[serde(default)]
    pub trakt_id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    /// Rating out of 10
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub certification: Option<String>,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tmdb_poster_path: Option<String>,
}

impl ShowRecord {
    /// Create a show with only an id and title set
    pub fn new(trakt_id: u64, title: impl Into<String>) -> Self {
        Self {
            trakt_id: Some(trakt_id),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Title for display, falling back to the original title
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.original_title.as_deref())
            .unwrap_or("Untitled")
    }

    /// Genres joined for display
    pub fn genres_str(&self) -> String {
        self.genres
            .as_ref()
            .map(|g| g.join(", "))
            .unwrap_or_default()
    }
}

impl fmt::Display for ShowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self
            .trakt_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "?".to_string());
        match self.rating {
            Some(rating) => write!(f, "[{}] {} - ⭐ {:.1}", id, self.display_title(), rating),
            None => write!(f, "[{}] {}", id, self.display_title()),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shows plus a related-show index keyed by trakt id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowCatalog {
    #[serde(default)]
    pub shows: Vec<ShowRecord>,
    /// trakt id -> ordered trakt ids of related shows
    #[serde(default)]
    pub related: HashMap<u64, Vec<u64>>,
}

impl ShowCatalog {
    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        log::debug!(
            "loaded {} shows from {}",
            catalog.shows.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The bundled demo catalog
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_json(DEMO_CATALOG)
    }

    /// Find a show by trakt id
    pub fn show(&self, trakt_id: u64) -> Option<&ShowRecord> {
        self.shows.iter().find(|s| s.trakt_id == Some(trakt_id))
    }

    /// Related shows for `trakt_id`.
    ///
    /// `None` when the catalog has no related entry at all, which is
    /// different from an entry listing zero shows. Ids that don't resolve
    /// to a show in the catalog are dropped.
    pub fn related_to(&self, trakt_id: u64) -> Option<Vec<ShowRecord>> {
        let ids = self.related.get(&trakt_id)?;
        let shows = ids
            .iter()
            .filter_map(|id| {
                let show = self.show(*id);
                if show.is_none() {
                    log::warn!("related show {} of {} not in catalog", id, trakt_id);
                }
                show.cloned()
            })
            .collect();
        Some(shows)
    }

    /// First show with an id, used as the landing show
    pub fn first_id(&self) -> Option<u64> {
        self.shows.iter().find_map(|s| s.trakt_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> ShowCatalog {
        ShowCatalog::from_json(
            r#"{
                "shows": [
                    {"trakt_id": 1, "title": "Foo", "rating": 8.1},
                    {"trakt_id": 2, "title": "Bar"},
                    {"trakt_id": 3, "original_title": "Baz"}
                ],
                "related": {
                    "1": [2, 3, 99],
                    "2": []
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_show_lookup() {
        let catalog = sample_catalog();
        assert_eq!(catalog.show(2).unwrap().title.as_deref(), Some("Bar"));
        assert!(catalog.show(42).is_none());
    }

    #[test]
    fn test_related_absent_vs_empty() {
        let catalog = sample_catalog();
        assert!(catalog.related_to(3).is_none());
        assert_eq!(catalog.related_to(2), Some(vec![]));
    }

    #[test]
    fn test_related_skips_unknown_ids() {
        let catalog = sample_catalog();
        let related = catalog.related_to(1).unwrap();
        let ids: Vec<_> = related.iter().map(|s| s.trakt_id).collect();
        assert_eq!(ids, vec![Some(2), Some(3)]);
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let catalog = sample_catalog();
        let baz = catalog.show(3).unwrap();
        assert!(baz.title.is_none());
        assert!(baz.rating.is_none());
        assert!(baz.genres.is_none());
    }

    #[test]
    fn test_display_title_fallback() {
        let catalog = sample_catalog();
        assert_eq!(catalog.show(1).unwrap().display_title(), "Foo");
        assert_eq!(catalog.show(3).unwrap().display_title(), "Baz");
        assert_eq!(ShowRecord::default().display_title(), "Untitled");
    }

    #[test]
    fn test_show_display() {
        let show = ShowRecord {
            rating: Some(8.06),
            ..ShowRecord::new(5, "Bar")
        };
        assert_eq!(format!("{}", show), "[5] Bar - ⭐ 8.1");
        assert_eq!(format!("{}", ShowRecord::default()), "[?] Untitled");
    }

    #[test]
    fn test_demo_catalog_parses() {
        let catalog = ShowCatalog::demo().unwrap();
        assert!(!catalog.shows.is_empty());
        assert!(catalog.first_id().is_some());
    }

    #[test]
    fn test_invalid_json() {
        let err = ShowCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
