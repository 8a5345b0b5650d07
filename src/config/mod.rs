//! Configuration module for nestfind
//!
//! Manages engine settings such as the loading delay and map focus zoom.
//! Settings are layered: built-in defaults, then an optional TOML file in the
//! user's config directory (or an explicit path), then `NESTFIND_*`
//! environment variables.

use crate::search::loading::MAX_LOADING_DELAY;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use config::ConfigError;

/// Engine configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// How long the skeleton state is shown after a mode change
    pub loading_delay_ms: u64,

    /// Zoom level the map flies to when a marker is hovered
    pub focus_zoom: f64,

    /// Number of memoized filter results kept
    pub memo_capacity: u64,

    /// Placeholder rows rendered while loading
    pub skeleton_count: usize,

    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: 500,
            focus_zoom: 15.0,
            memo_capacity: 64,
            skeleton_count: 6,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("nestfind").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default location
    ///
    /// An explicit `path` must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicit file is missing, any file cannot be
    /// parsed, or an environment override has the wrong type.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::from(Self::config_path()?)
                .format(FileFormat::Toml)
                .required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("NESTFIND").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        if config.loading_delay() > MAX_LOADING_DELAY {
            return Err(ConfigError::Message(format!(
                "loading_delay_ms {} exceeds the maximum of {} ms",
                config.loading_delay_ms,
                MAX_LOADING_DELAY.as_millis()
            )));
        }
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    #[must_use]
    pub const fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    /// Render as TOML for display
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.loading_delay_ms, 500);
        assert!((config.focus_zoom - 15.0).abs() < f64::EPSILON);
        assert_eq!(config.memo_capacity, 64);
        assert_eq!(config.skeleton_count, 6);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_loading_delay_duration() {
        let config = EngineConfig {
            loading_delay_ms: 250,
            ..EngineConfig::default()
        };
        assert_eq!(config.loading_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = EngineConfig {
            loading_delay_ms: 300,
            focus_zoom: 12.5,
            memo_capacity: 8,
            skeleton_count: 3,
            log_level: "debug".to_string(),
        };
        config.save_to(&path).unwrap();

        let loaded = EngineConfig::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.loading_delay_ms, 300);
        assert_eq!(loaded.memo_capacity, 8);
        assert_eq!(loaded.skeleton_count, 3);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "focus_zoom = 13.0\n").unwrap();

        let loaded = EngineConfig::load_from(Some(&path)).unwrap();
        assert!((loaded.focus_zoom - 13.0).abs() < f64::EPSILON);
        assert_eq!(loaded.skeleton_count, 6);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(EngineConfig::load_from(Some(&path)).is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "loading_delay_ms = \"soon\"\n").unwrap();
        assert!(EngineConfig::load_from(Some(&path)).is_err());
    }

    #[test]
    fn test_oversized_loading_delay_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "loading_delay_ms = 10000000000\n").unwrap();

        let err = EngineConfig::load_from(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("loading_delay_ms"));
    }

    #[test]
    fn test_to_toml_contains_fields() {
        let rendered = EngineConfig::default().to_toml().unwrap();
        assert!(rendered.contains("loading_delay_ms = 500"));
        assert!(rendered.contains("log_level = \"info\""));
    }

    #[test]
    fn test_config_path_ends_with_nestfind() {
        if let Ok(path) = EngineConfig::config_path() {
            assert!(path.ends_with("nestfind/config.toml"));
        }
    }
}
