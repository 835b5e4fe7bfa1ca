//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for exercising the Linedesk client against
//! `wiremock` servers.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use linedesk_client::endpoints;
#[allow(unused_imports)]
pub use serde_json::json;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use linedesk_client::{AuthStrategy, LineClient};
use secrecy::SecretString;

/// Build a client authenticated with a static API token against `uri`.
#[allow(dead_code)]
pub fn api_token_client(uri: &str, token: &str) -> LineClient {
    LineClient::builder()
        .base_url(uri.to_string())
        .auth_strategy(AuthStrategy::ApiToken {
            token: SecretString::new(token.to_string().into()),
        })
        .build()
        .expect("client should build")
}

/// Build a client using username/password session auth against `uri`.
#[allow(dead_code)]
pub fn session_client(uri: &str, username: &str, password: &str) -> LineClient {
    LineClient::builder()
        .base_url(uri.to_string())
        .auth_strategy(AuthStrategy::SessionToken {
            username: username.to_string(),
            password: SecretString::new(password.to_string().into()),
        })
        .build()
        .expect("client should build")
}

/// Two lines in backend order, the second using the `addr` spelling.
#[allow(dead_code)]
pub fn two_lines_body() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "number": "555-0100",
            "sim_slot": 1,
            "device_mark": "Pixel-7",
            "endpoint": "sip.example.com"
        },
        {
            "id": 2,
            "number": "555-0101",
            "sim_slot": 2,
            "device_mark": "Moto-G",
            "addr": "10.0.0.5:5060"
        }
    ])
}
