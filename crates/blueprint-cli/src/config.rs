//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use blueprint::{BlueprintError, config::AppConfig, semantic::NodeCategory};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid configuration in {path}: {message}")]
    Validation { path: PathBuf, message: String },
}

impl From<ConfigError> for BlueprintError {
    fn from(err: ConfigError) -> Self {
        BlueprintError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (blueprint/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file, from `--config`
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - Config file parses but fails [`validate`]
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, BlueprintError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("blueprint/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "blueprint", "blueprint") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
/// - A format list or color in the file is unusable
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, BlueprintError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate(&config).map_err(|message| ConfigError::Validation {
        path: path.to_path_buf(),
        message,
    })?;
    debug!(formats:? = config.render().formats(); "Configuration validated");

    Ok(config)
}

/// Check a parsed configuration before any diagram is rendered.
///
/// Colors are otherwise only parsed during export, after earlier views have
/// already been written.
fn validate(config: &AppConfig) -> Result<(), String> {
    if config.render().formats().is_empty() {
        return Err("`render.formats` must name at least one output format".to_string());
    }

    let style = config.style();
    style.background_color()?;
    style.edge_color()?;
    for category in NodeCategory::ALL {
        style.category_fill(category)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use blueprint::config::OutputFormat;

    use super::*;

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = load_config(Some(&missing)).unwrap_err();
        assert!(matches!(err, BlueprintError::Config(msg) if msg.contains("nope.toml")));
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[render]\nformats = [\"svg\"]\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.render().formats(), &[OutputFormat::Svg]);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[render\nformats = 3").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, BlueprintError::Config(msg) if msg.starts_with("Failed to parse")));
    }

    #[test]
    fn test_empty_format_list_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[render]\nformats = []\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(
            matches!(&err, BlueprintError::Config(msg) if msg.contains("render.formats")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_invalid_category_color_is_rejected_at_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[style.categories]\nqueue = \"not-a-color\"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        let BlueprintError::Config(msg) = err else {
            panic!("expected a configuration error");
        };
        assert!(msg.starts_with("Invalid configuration in"));
        assert!(msg.contains("queue fill color"));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate(&AppConfig::default()), Ok(()));
    }
}
