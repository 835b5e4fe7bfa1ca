//! Profile loading tests for the configuration loader builder.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

use super::cleared_env;

/// Creates a config file with a session-auth `dev` profile and a token-auth `prod` profile.
pub fn create_test_config_file(dir: &std::path::Path) -> PathBuf {
    let config_path = dir.join("config.json");

    let config = serde_json::json!({
        "profiles": {
            "dev": {
                "base_url": "http://dev.lines.local:8080/",
                "username": "dev_user",
                "password": "dev-password",
                "skip_verify": true,
                "timeout_seconds": 60
            },
            "prod": {
                "base_url": "https://lines.example.com",
                "api_token": "prod-token-123"
            }
        }
    });

    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "{}", config).unwrap();

    config_path
}

#[test]
#[serial]
fn test_load_session_profile() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    temp_env::with_vars(cleared_env(), || {
        let config = ConfigLoader::new()
            .with_profile_name("dev".to_string())
            .with_config_path(config_path.clone())
            .from_profile()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.connection.base_url, "http://dev.lines.local:8080");
        assert!(config.connection.skip_verify);
        assert_eq!(config.connection.timeout, Duration::from_secs(60));
        match config.auth.strategy {
            AuthStrategy::SessionToken { username, password } => {
                assert_eq!(username, "dev_user");
                assert_eq!(password.expose_secret(), "dev-password");
            }
            AuthStrategy::ApiToken { .. } => panic!("expected session auth"),
        }
    });
}

#[test]
#[serial]
fn test_load_token_profile() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    temp_env::with_vars(cleared_env(), || {
        let config = ConfigLoader::new()
            .with_profile_name("prod".to_string())
            .with_config_path(config_path.clone())
            .from_profile()
            .unwrap()
            .build()
            .unwrap();

        assert!(matches!(
            config.auth.strategy,
            AuthStrategy::ApiToken { ref token } if token.expose_secret() == "prod-token-123"
        ));
        assert!(!config.connection.skip_verify);
    });
}

#[test]
#[serial]
fn test_missing_profile_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    temp_env::with_vars(cleared_env(), || {
        let result = ConfigLoader::new()
            .with_profile_name("staging".to_string())
            .with_config_path(config_path.clone())
            .from_profile();

        assert!(matches!(result, Err(ConfigError::ProfileNotFound(name)) if name == "staging"));
    });
}

#[test]
#[serial]
fn test_missing_config_file_is_profile_not_found() {
    let temp_dir = TempDir::new().unwrap();

    temp_env::with_vars(cleared_env(), || {
        let result = ConfigLoader::new()
            .with_profile_name("dev".to_string())
            .with_config_path(temp_dir.path().join("absent.json"))
            .from_profile();

        assert!(matches!(result, Err(ConfigError::ProfileNotFound(_))));
    });
}

#[test]
#[serial]
fn test_corrupt_config_file_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    temp_env::with_vars(cleared_env(), || {
        let result = ConfigLoader::new()
            .with_profile_name("dev".to_string())
            .with_config_path(path.clone())
            .from_profile();

        assert!(matches!(result, Err(ConfigError::ConfigFileParse { .. })));
    });
}

#[test]
#[serial]
fn test_no_profile_name_skips_file() {
    temp_env::with_vars(cleared_env(), || {
        // The path does not exist, but it is never read.
        let loader = ConfigLoader::new()
            .with_config_path(PathBuf::from("/nonexistent/linedesk/config.json"))
            .from_profile();
        assert!(loader.is_ok());
    });
}

#[test]
#[serial]
fn test_builder_overrides_profile() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config_file(temp_dir.path());

    temp_env::with_vars(cleared_env(), || {
        let config = ConfigLoader::new()
            .with_profile_name("dev".to_string())
            .with_config_path(config_path.clone())
            .with_skip_verify(false)
            .with_timeout(Duration::from_secs(5))
            .from_profile()
            .unwrap()
            .build()
            .unwrap();

        assert!(!config.connection.skip_verify);
        assert_eq!(config.connection.timeout, Duration::from_secs(5));
    });
}
