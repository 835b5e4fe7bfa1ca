//! Lines endpoint.

use reqwest::Client;

use crate::endpoints::request::{decode_json, send_request};
use crate::error::Result;
use crate::models::Line;

/// List all lines, in the order the backend returns them.
pub async fn list_lines(client: &Client, base_url: &str, auth_token: &str) -> Result<Vec<Line>> {
    let url = format!("{}/api/lines", base_url);

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token));
    let response = send_request(builder).await?;

    decode_json(response).await
}
