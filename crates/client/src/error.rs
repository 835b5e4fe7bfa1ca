//! Error types for the Linedesk client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Linedesk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from the backend.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// No valid session token is available.
    #[error("Session expired for {username}, please re-authenticate")]
    SessionExpired { username: String },

    /// Invalid response format from the backend.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_) | Self::SessionExpired { .. })
            || matches!(self.status(), Some(401 | 403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_auth_error() {
        let err = ClientError::AuthFailed("test".to_string());
        assert!(err.is_auth_error());

        let err = ClientError::SessionExpired {
            username: "admin".to_string(),
        };
        assert!(err.is_auth_error());

        let err = ClientError::ApiError {
            status: 401,
            url: "http://localhost/api/lines".to_string(),
            message: "Unauthorized".to_string(),
        };
        assert!(err.is_auth_error());

        let err = ClientError::InvalidResponse("bad json".to_string());
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_status_only_for_api_errors() {
        let err = ClientError::ApiError {
            status: 503,
            url: "http://localhost/api/lines".to_string(),
            message: "down".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(ClientError::InvalidUrl("x".to_string()).status(), None);
    }

    #[test]
    fn test_api_error_display_includes_url_and_message() {
        let err = ClientError::ApiError {
            status: 500,
            url: "http://localhost/api/lines".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (500) at http://localhost/api/lines: boom"
        );
    }
}
