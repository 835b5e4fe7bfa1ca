//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid boolean/numeric values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

pub const ENV_BASE_URL: &str = "LINEDESK_BASE_URL";
pub const ENV_USERNAME: &str = "LINEDESK_USERNAME";
pub const ENV_PASSWORD: &str = "LINEDESK_PASSWORD";
pub const ENV_API_TOKEN: &str = "LINEDESK_API_TOKEN";
pub const ENV_SKIP_VERIFY: &str = "LINEDESK_SKIP_VERIFY";
pub const ENV_TIMEOUT: &str = "LINEDESK_TIMEOUT";
pub const ENV_CONFIG_PATH: &str = "LINEDESK_CONFIG_PATH";
pub const ENV_PROFILE: &str = "LINEDESK_PROFILE";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

/// Apply environment variable configuration to the loader.
///
/// Only variables that are set overwrite loader values, so profile values
/// survive for anything the environment leaves unset.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none(ENV_USERNAME) {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none(ENV_PASSWORD) {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(token) = env_var_or_none(ENV_API_TOKEN) {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        loader.set_skip_verify(Some(parse_bool(ENV_SKIP_VERIFY, &skip)?));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(())
}

/// Profile selection from the environment, applied before the profile file
/// is read. Builder values already set are kept.
pub fn apply_profile_selection(loader: &mut ConfigLoader) {
    if loader.profile_name().is_none()
        && let Some(name) = env_var_or_none(ENV_PROFILE)
    {
        loader.set_profile_name(Some(name));
    }
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(path.into()));
    }
}
