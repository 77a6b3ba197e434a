//! Per-user local configuration.
//!
//! Exactly two fields are remembered between runs: the database URL and the
//! last username. A file that fails to parse is deleted and ignored, and
//! the application falls back to first-run provisioning.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const CONFIG_DIR: &str = ".pitcrew";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalConfig {
    #[serde(rename = "dbUrl", default, skip_serializing_if = "Option::is_none")]
    pub db_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl LocalConfig {
    #[must_use]
    pub fn path() -> PathBuf {
        dirs::home_dir().map_or_else(
            || PathBuf::from(CONFIG_FILE),
            |home| home.join(CONFIG_DIR).join(CONFIG_FILE),
        )
    }

    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                warn!("discarding corrupt config file {}: {err}", path.display());
                if let Err(err) = std::fs::remove_file(path) {
                    warn!("could not delete corrupt config file: {err}");
                }
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        info!("config saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pitcrew-config-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn round_trips_the_two_recognized_fields() {
        let path = temp_config("roundtrip");
        let config = LocalConfig {
            db_url: Some("postgresql://u:p@host/db".to_string()),
            username: Some("alice".to_string()),
        };
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"dbUrl\""));
        assert!(content.contains("\"username\""));

        assert_eq!(LocalConfig::load_from(&path), config);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = temp_config("missing");
        std::fs::remove_file(&path).ok();
        assert_eq!(LocalConfig::load_from(&path), LocalConfig::default());
    }

    #[test]
    fn corrupt_file_is_deleted_and_ignored() {
        let path = temp_config("corrupt");
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(LocalConfig::load_from(&path), LocalConfig::default());
        assert!(!path.exists());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let path = temp_config("unknown");
        std::fs::write(
            &path,
            r#"{ "dbUrl": "postgresql://u:p@host/db", "username": "bob", "theme": "dark" }"#,
        )
        .unwrap();

        let config = LocalConfig::load_from(&path);
        assert_eq!(config.db_url.as_deref(), Some("postgresql://u:p@host/db"));
        assert_eq!(config.username.as_deref(), Some("bob"));
        std::fs::remove_file(&path).ok();
    }
}
