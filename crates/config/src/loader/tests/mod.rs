//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests touching the environment are `#[serial]` and scope their variables
//!   with `temp_env`, clearing every `LINEDESK_*` variable they don't set.
//! - Temporary directories are cleaned up automatically via `tempfile`.

pub mod profile_tests;

/// Every variable the loader reads, unset. Tests extend this with their own values.
pub fn cleared_env() -> Vec<(&'static str, Option<String>)> {
    vec![
        ("LINEDESK_BASE_URL", None),
        ("LINEDESK_USERNAME", None),
        ("LINEDESK_PASSWORD", None),
        ("LINEDESK_API_TOKEN", None),
        ("LINEDESK_SKIP_VERIFY", None),
        ("LINEDESK_TIMEOUT", None),
        ("LINEDESK_CONFIG_PATH", None),
        ("LINEDESK_PROFILE", None),
        ("DOTENV_DISABLED", Some("1".to_string())),
    ]
}

/// `cleared_env()` with `overrides` replacing matching keys.
pub fn env_with(overrides: &[(&'static str, Option<&str>)]) -> Vec<(&'static str, Option<String>)> {
    let mut vars: Vec<_> = cleared_env()
        .into_iter()
        .filter(|(k, _)| !overrides.iter().any(|(o, _)| o == k))
        .collect();
    vars.extend(overrides.iter().map(|(k, v)| (*k, v.map(str::to_string))));
    vars
}
