//! Profile file loading for configuration.
//!
//! Invariants:
//! - The file is only read when a profile name is selected.
//! - A missing file or a missing profile is `ConfigError::ProfileNotFound`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::types::{ConfigFile, ProfileConfig};

/// Returns the platform config file path:
/// - Linux: `~/.config/linedesk/config.json`
/// - macOS: `~/Library/Application Support/linedesk/config.json`
/// - Windows: `%AppData%\linedesk\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .ok_or(ConfigError::ConfigDirUnavailable)?;
    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Read and parse the config file at `path`.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        kind: e.kind(),
    })?;

    serde_json::from_str(&content).map_err(|_| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
    })
}

/// Apply the selected profile from the config file to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let Some(profile_name) = loader.profile_name().cloned() else {
        return Ok(());
    };

    let config_path = match loader.config_path() {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Config file not found");
        return Err(ConfigError::ProfileNotFound(profile_name));
    }

    let mut file = read_config_file(&config_path)?;
    let profile = file
        .profiles
        .remove(&profile_name)
        .ok_or(ConfigError::ProfileNotFound(profile_name))?;

    apply_profile_config(loader, profile);
    Ok(())
}

fn apply_profile_config(loader: &mut ConfigLoader, profile: ProfileConfig) {
    if let Some(url) = profile.base_url {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = profile.username {
        loader.set_username(Some(username));
    }
    if let Some(password) = profile.password {
        loader.set_password(Some(password));
    }
    if let Some(token) = profile.api_token {
        loader.set_api_token(Some(token));
    }
    if let Some(skip) = profile.skip_verify {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
}
