// SPDX-License-Identifier: AGPL-3.0
// Wanderlist Core - Configuration loading
//
// Configuration is a small local JSON file next to the data files.

use crate::types::{AppConfig, AppError};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";

/// Platform config directory for Wanderlist, created if missing
pub fn default_config_dir() -> Result<PathBuf, AppError> {
    let config_dir = directories::ProjectDirs::from("com", "wanderlist", "wanderlist")
        .ok_or_else(|| AppError::FileIo("Could not determine config directory".to_string()))?
        .config_dir()
        .to_path_buf();

    // Ensure the directory exists
    fs::create_dir_all(&config_dir)
        .map_err(|e| AppError::FileIo(format!("Failed to create config dir: {}", e)))?;

    Ok(config_dir)
}

/// Default location of the config file
pub fn default_config_path() -> Result<PathBuf, AppError> {
    Ok(default_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from `path`, or from the default location.
///
/// A missing file yields defaults. A malformed file is logged and also
/// yields defaults; only an unreadable file is an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let file_path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    tracing::debug!("Config file path: {:?}", file_path);

    if !file_path.exists() {
        tracing::info!("No config file found, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&file_path)
        .map_err(|e| AppError::FileIo(format!("Failed to read config: {}", e)))?;

    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse config, using defaults: {}", e);
        AppConfig::default()
    }))
}

/// Write configuration to `path`
pub fn save_config(path: &Path, config: &AppConfig) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::FileIo(format!("Failed to create config dir: {}", e)))?;
    }

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| AppError::Serialization(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, content)
        .map_err(|e| AppError::FileIo(format!("Failed to write config: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClearScope;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(dir.path().join("config.json").as_path())).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            data_dir: Some(dir.path().join("data")),
            clear_scope: ClearScope::ProgressOnly,
        };

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(Some(path.as_path())).unwrap(), config);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ clearScope: ").unwrap();

        assert_eq!(load_config(Some(path.as_path())).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_wire_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"clearScope":"progressOnly"}"#).unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.clear_scope, ClearScope::ProgressOnly);
        assert_eq!(config.data_dir, None);
    }
}
