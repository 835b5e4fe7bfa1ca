//! Connection configuration types for Linedesk.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide convenience constructors for common config patterns.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Durations are serialized as integer seconds.

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the Linedesk backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the backend (e.g., https://lines.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
}

impl Config {
    fn with_strategy(base_url: String, strategy: AuthStrategy) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig { strategy },
        }
    }

    /// Create a config with API token authentication and default connection settings.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self::with_strategy(base_url, AuthStrategy::ApiToken { token })
    }

    /// Create a config with username/password authentication and default connection settings.
    pub fn with_session_token(base_url: String, username: String, password: SecretString) -> Self {
        Self::with_strategy(base_url, AuthStrategy::SessionToken { username, password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_serialized_as_seconds() {
        let config = Config::with_api_token(
            "https://lines.example.com".to_string(),
            SecretString::new("t".to_string().into()),
        );
        let value = serde_json::to_value(&config.connection).unwrap();
        assert_eq!(value["timeout"], DEFAULT_TIMEOUT_SECS);
        assert_eq!(value["skip_verify"], false);
    }

    #[test]
    fn test_timeout_deserialized_from_seconds() {
        let json = r#"{"base_url":"http://localhost:8080","skip_verify":true,"timeout":12}"#;
        let conn: ConnectionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(conn.timeout, Duration::from_secs(12));
        assert!(conn.skip_verify);
    }

    #[test]
    fn test_with_session_token() {
        let config = Config::with_session_token(
            "http://localhost:8080".to_string(),
            "operator".to_string(),
            SecretString::new("pw".to_string().into()),
        );
        assert!(matches!(
            config.auth.strategy,
            AuthStrategy::SessionToken { ref username, .. } if username == "operator"
        ));
    }
}
