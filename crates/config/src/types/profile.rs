//! Profile configuration types.
//!
//! Invariants:
//! - All fields are optional to allow partial profile definitions.
//! - Unknown keys in the config file are ignored.

use std::collections::BTreeMap;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::types::auth::secret_string_opt;

/// A named connection profile as stored in the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub base_url: Option<String>,
    pub username: Option<String>,
    #[serde(with = "secret_string_opt")]
    pub password: Option<SecretString>,
    #[serde(with = "secret_string_opt")]
    pub api_token: Option<SecretString>,
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
}

/// On-disk config file: `{"profiles": {"<name>": {...}}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub profiles: BTreeMap<String, ProfileConfig>,
}
