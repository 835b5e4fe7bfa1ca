//! Request dispatch and response status mapping.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ErrorBody;

/// Sends an HTTP request and maps non-2xx responses to [`ClientError::ApiError`].
///
/// Requests are sent once. Transport failures surface as
/// [`ClientError::HttpError`].
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let status = status.as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or(body);

    debug!(status, url = %url, "Backend returned error status");

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}

/// Read the response body and decode it as JSON.
///
/// Decoding failures become [`ClientError::InvalidResponse`] rather than a
/// transport error.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to decode body: {}", e)))
}
