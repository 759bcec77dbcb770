//! Config loading: read from a path or the platform default location.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use oriel_common::ConfigError;

use crate::schema::BridgeConfig;
use crate::template::default_config_toml;
use crate::validation;

/// Load config from a specific TOML file path.
///
/// Missing fields use schema defaults. After parsing, the config is
/// validated; a validation failure is logged as a warning and the parsed
/// config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<BridgeConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Io(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: BridgeConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; keeping parsed values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/oriel/config.toml`
/// On Linux: `~/.config/oriel/config.toml`
///
/// If the file does not exist, a documented default config is written
/// there and the defaults are returned.
pub fn load_default() -> Result<BridgeConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(BridgeConfig::default())
        }
        other => other,
    }
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::Io("could not determine config directory".into()))?;
    Ok(config_dir.join("oriel").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Io(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::Io(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
