//! Configuration management for showdetail
//!
//! Handles config file loading/saving.
//! Config is stored at ~/.config/showdetail/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::images::TmdbImageUrlProvider;
use crate::resources::Resources;

/// Default cells per shared row on the details screen
pub const DEFAULT_GRID_COLUMNS: u16 = 3;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// TMDB image CDN base URL
    pub image_base_url: Option<String>,
    /// Poster sizes offered by the image CDN, smallest first
    pub poster_sizes: Option<Vec<String>>,
    /// Cells per shared row on the details screen
    pub grid_columns: Option<u16>,
    /// Log filter (env_logger syntax)
    pub log_level: Option<String>,
    /// TOML bundle overriding the built-in strings
    pub strings: Option<PathBuf>,
}

impl Config {
    /// Get config file path (~/.config/showdetail/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("showdetail").join("config.toml"))
    }

    /// Load config from the default location, or defaults if missing/invalid
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| Self::load_from(&p).ok())
            .unwrap_or_default()
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Image provider built from the configured CDN settings
    pub fn image_provider(&self) -> TmdbImageUrlProvider {
        let default = TmdbImageUrlProvider::default();
        match (&self.image_base_url, &self.poster_sizes) {
            (None, None) => default,
            (base, sizes) => TmdbImageUrlProvider::new(
                base.clone()
                    .unwrap_or_else(|| default.base_url().to_string()),
                sizes.clone().unwrap_or_else(|| {
                    crate::images::DEFAULT_POSTER_SIZES
                        .iter()
                        .map(|s| s.to_string())
                        .collect()
                }),
            ),
        }
    }

    pub fn grid_columns(&self) -> u16 {
        self.grid_columns
            .filter(|c| *c > 0)
            .unwrap_or(DEFAULT_GRID_COLUMNS)
    }

    /// English strings, with the configured bundle layered on top
    pub fn resources(&self) -> Result<Resources> {
        let english = Resources::english();
        let Some(path) = &self.strings else {
            return Ok(english);
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read strings {}", path.display()))?;
        let resources = english
            .with_overrides_from_toml(&text)
            .with_context(|| format!("Invalid strings {}", path.display()))?;
        Ok(resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("showdetail-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.image_base_url.is_none());
        assert_eq!(config.grid_columns(), DEFAULT_GRID_COLUMNS);
        assert_eq!(config.image_provider(), TmdbImageUrlProvider::default());
    }

    #[test]
    fn test_zero_columns_fall_back() {
        let config = Config {
            grid_columns: Some(0),
            ..Config::default()
        };
        assert_eq!(config.grid_columns(), DEFAULT_GRID_COLUMNS);
    }

    #[test]
    fn test_image_provider_from_config() {
        let config = Config {
            image_base_url: Some("http://cdn/".to_string()),
            ..Config::default()
        };
        let provider = config.image_provider();
        assert_eq!(provider.poster_url("/x.jpg", 90), "http://cdn/w92/x.jpg");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("config.toml");
        let config = Config {
            grid_columns: Some(4),
            log_level: Some("debug".to_string()),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_resources_override() {
        let path = temp_path("strings.toml");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[strings]\nrelated_title = \"See also\"\n").unwrap();

        let config = Config {
            strings: Some(path.clone()),
            ..Config::default()
        };
        let res = config.resources().unwrap();
        assert_eq!(
            res.string(crate::resources::StringKey::RelatedTitle, &[]).unwrap(),
            "See also"
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_strings_file_is_error() {
        let config = Config {
            strings: Some(temp_path("does-not-exist.toml")),
            ..Config::default()
        };
        assert!(config.resources().is_err());
    }
}
