//! Integration tests for configuration loading through the public API.
//!
//! These tests drive the `ConfigLoader` chain the way the TUI entrypoint
//! does: dotenv, profile, environment, then CLI overrides.

use linedesk_config::{AuthStrategy, ConfigError, ConfigLoader, default_config_path};
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;
use tempfile::TempDir;

const LOADER_VARS: [&str; 8] = [
    "LINEDESK_BASE_URL",
    "LINEDESK_USERNAME",
    "LINEDESK_PASSWORD",
    "LINEDESK_API_TOKEN",
    "LINEDESK_SKIP_VERIFY",
    "LINEDESK_TIMEOUT",
    "LINEDESK_CONFIG_PATH",
    "LINEDESK_PROFILE",
];

fn isolated<R>(extra: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut vars: Vec<(&str, Option<&str>)> = LOADER_VARS
        .iter()
        .filter(|k| !extra.iter().any(|(e, _)| e == *k))
        .map(|k| (*k, None))
        .collect();
    vars.push(("DOTENV_DISABLED", Some("1")));
    vars.extend(extra.iter().map(|(k, v)| (*k, Some(*v))));
    temp_env::with_vars(vars, f)
}

#[test]
#[serial]
fn test_full_chain_precedence() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(
        &path,
        serde_json::json!({
            "profiles": {
                "ops": {
                    "base_url": "https://profile.example.com",
                    "username": "profile_user",
                    "password": "profile-pw",
                    "timeout_seconds": 10,
                    "skip_verify": true
                }
            }
        })
        .to_string(),
    )
    .unwrap();

    isolated(
        &[
            ("LINEDESK_USERNAME", "env_user"),
            ("LINEDESK_TIMEOUT", "20"),
        ],
        || {
            let config = ConfigLoader::new()
                .load_dotenv()
                .unwrap()
                .with_profile_name("ops".to_string())
                .with_config_path(path.clone())
                .with_timeout(Duration::from_secs(40))
                .from_profile()
                .unwrap()
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            // profile only
            assert_eq!(config.connection.base_url, "https://profile.example.com");
            assert!(config.connection.skip_verify);
            // env beats profile, CLI beats env
            assert_eq!(config.connection.timeout, Duration::from_secs(40));
            match config.auth.strategy {
                AuthStrategy::SessionToken { username, password } => {
                    assert_eq!(username, "env_user");
                    assert_eq!(password.expose_secret(), "profile-pw");
                }
                AuthStrategy::ApiToken { .. } => panic!("expected session auth"),
            }
        },
    );
}

#[test]
#[serial]
fn test_nothing_configured_reports_missing_base_url() {
    isolated(&[], || {
        let result = ConfigLoader::new()
            .from_profile()
            .unwrap()
            .from_env()
            .unwrap()
            .build();
        assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
    });
}

#[test]
fn test_default_config_path_is_linedesk_config_json() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("config.json"));
        assert!(path.to_string_lossy().contains("linedesk"));
    }
}

#[test]
fn test_error_messages_name_the_env_var() {
    let err = ConfigError::MissingBaseUrl;
    assert!(err.to_string().contains("LINEDESK_BASE_URL"));
}
