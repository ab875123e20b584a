//! Application configuration
//!
//! A small TOML file under the platform config directory. Everything has a
//! default, so a missing or unreadable file silently yields the defaults:
//! bundled catalog, dark theme.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::services::catalog::CatalogSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Movie-listing endpoint returning a JSON array of movie records.
    /// When unset the catalog bundled into the binary is used.
    pub endpoint: Option<String>,
    /// "dark" or "light".
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            theme: "dark".to_string(),
        }
    }
}

impl AppConfig {
    /// Load the config from the platform config directory, falling back to
    /// defaults when the file is absent or unreadable.
    pub fn load() -> Self {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No config directory available, using default configuration");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(err) => {
                log::warn!("Failed to read config {}: {}", path.display(), err);
                return Self::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Malformed config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// The catalog source this configuration selects.
    pub fn catalog_source(&self) -> CatalogSource {
        match &self.endpoint {
            Some(url) => CatalogSource::Remote(url.clone()),
            None => CatalogSource::Bundled,
        }
    }

    pub fn prefers_dark_theme(&self) -> bool {
        self.theme != "light"
    }
}

fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "movie-countdown")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml"));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.catalog_source(), CatalogSource::Bundled);
        assert!(config.prefers_dark_theme());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "endpoint = [not toml").unwrap();
        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            endpoint: Some("https://example.test/movies".to_string()),
            theme: "light".to_string(),
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.catalog_source(),
            CatalogSource::Remote("https://example.test/movies".to_string())
        );
        assert!(!loaded.prefers_dark_theme());
    }
}
