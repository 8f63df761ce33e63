use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::storage::snapshot::JsonSnapshotFile;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub ui: UiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    // Overrides the platform data-dir location of the events snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("moncal")
            .join("config.toml")
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.storage
            .events_file
            .clone()
            .unwrap_or_else(JsonSnapshotFile::default_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig { theme: "default".to_string() },
            storage: StorageConfig { events_file: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_the_default_theme() {
        let config = Config::default();
        assert_eq!(config.ui.theme, "default");
    }

    #[test]
    fn default_config_has_no_snapshot_override() {
        let config = Config::default();
        assert_eq!(config.storage.events_file, None);
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [ui]
            theme = "gruvbox"

            [storage]
            events_file = "/tmp/events.json"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.ui.theme, "gruvbox");
        assert_eq!(config.storage.events_file, Some(PathBuf::from("/tmp/events.json")));
    }

    #[test]
    fn storage_section_without_override_parses() {
        let toml_content = r#"
            [ui]
            theme = "nord"

            [storage]
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.storage.events_file, None);
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let invalid_toml = "this is not valid toml";
        let result = Config::from_toml(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn snapshot_path_honors_the_override() {
        let mut config = Config::default();
        config.storage.events_file = Some(PathBuf::from("/tmp/custom.json"));

        assert_eq!(config.snapshot_path(), PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = Config::default();
        config.ui.theme = "dracula".to_string();

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::from_toml(&serialized).unwrap();

        assert_eq!(parsed, config);
    }
}
