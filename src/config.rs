use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Look-ahead depth in plies for the engine's move search.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 4 }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event-poll interval for the terminal loop, in milliseconds.
    pub tick_rate_ms: u64,
    /// How long a dropped token takes to fall, in milliseconds.
    pub drop_time_ms: u64,
    /// Quit this long after a finished game with no input, in seconds.
    pub idle_timeout_secs: u64,
    /// Start with the engine playing both sides.
    pub autopilot: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_rate_ms: 100,
            drop_time_ms: 1000,
            idle_timeout_secs: 60,
            autopilot: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.depth > 8 {
            return Err(ConfigError::Validation(
                "search.depth must be <= 8 (unpruned search)".into(),
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }
        if self.ui.drop_time_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.drop_time_ms must be > 0".into(),
            ));
        }
        if self.ui.idle_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "ui.idle_timeout_secs must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.search.depth, 4);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
depth = 6
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.depth, 6);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.idle_timeout_secs, 60);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.search.depth, 4);
        assert!(!config.ui.autopilot);
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 12;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_tick_rate() {
        let mut config = AppConfig::default();
        config.ui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_drop_time() {
        let mut config = AppConfig::default();
        config.ui.drop_time_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_idle_timeout() {
        let mut config = AppConfig::default();
        config.ui.idle_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.search.depth, 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
autopilot = true
drop_time_ms = 250
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(config.ui.autopilot);
        assert_eq!(config.ui.drop_time_ms, 250);
        // Others are defaults
        assert_eq!(config.search.depth, 4);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[search]\ndepth = 0\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
