//! Configuration management for schedview.
//!
//! Settings are read from a TOML file. The file is looked up, in order, at
//! an explicit path, at `$SCHEDVIEW_CONFIG`, and finally at
//! `<config_dir>/schedview/config.toml`. A missing file means defaults.

mod settings;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

pub use settings::{Settings, DEFAULT_ENDPOINT};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "SCHEDVIEW_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The config file exists but could not be read.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    /// The config file is not valid TOML for `Settings`.
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A setting has an unusable value.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Resolve the config file path.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("schedview").join("config.toml"))
}

impl Settings {
    /// Load settings from the resolved config path.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = config_path(explicit)?;
        Self::load_from(&path)
    }

    /// Load settings from a specific file.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "endpoint = \"http://example.test/schedule\"").unwrap();
        writeln!(file, "narrow_width = 100").unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.endpoint, "http://example.test/schedule");
        assert_eq!(settings.narrow_width, 100);
        assert_eq!(settings.timeout_secs, 30);
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "narrow_width = \"wide\"").unwrap();

        let err = Settings::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_fails_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 0").unwrap();

        let err = Settings::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    #[serial]
    fn test_config_path_explicit_wins() {
        std::env::set_var(CONFIG_ENV_VAR, "/tmp/from-env.toml");
        let path = config_path(Some(Path::new("/tmp/explicit.toml"))).unwrap();
        std::env::remove_var(CONFIG_ENV_VAR);
        assert_eq!(path, PathBuf::from("/tmp/explicit.toml"));
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        std::env::set_var(CONFIG_ENV_VAR, "/tmp/from-env.toml");
        let path = config_path(None).unwrap();
        std::env::remove_var(CONFIG_ENV_VAR);
        assert_eq!(path, PathBuf::from("/tmp/from-env.toml"));
    }

    #[test]
    #[serial]
    fn test_config_path_default_location() {
        std::env::remove_var(CONFIG_ENV_VAR);
        if let Ok(path) = config_path(None) {
            assert!(path.ends_with("schedview/config.toml"));
        }
    }
}
