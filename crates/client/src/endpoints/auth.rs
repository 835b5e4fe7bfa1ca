//! Authentication endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::{decode_json, send_request};
use crate::error::Result;
use crate::models::{LoginRequest, LoginResponse};

/// Login with username and password, returning the session token.
pub async fn login(client: &Client, base_url: &str, username: &str, password: &str) -> Result<String> {
    debug!("Logging in as {}", username);

    let url = format!("{}/api/login", base_url);
    let builder = client.post(&url).json(&LoginRequest { username, password });
    let response = send_request(builder).await?;

    let resp: LoginResponse = decode_json(response).await?;
    Ok(resp.token)
}

/// Terminate the session identified by `auth_token`. Any 2xx is success;
/// the response body is ignored.
pub async fn logout(client: &Client, base_url: &str, auth_token: &str) -> Result<()> {
    let url = format!("{}/api/logout", base_url);
    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token));
    send_request(builder).await?;
    Ok(())
}
