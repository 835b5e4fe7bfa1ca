//! Wire models for the Linedesk backend API.

use serde::{Deserialize, Serialize};

/// A communication line: a phone number bound to a device and a SIM slot.
///
/// The backend stores the serving endpoint as `addr`; both spellings are
/// accepted when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: i64,
    pub number: String,
    pub sim_slot: i64,
    pub device_mark: String,
    #[serde(alias = "addr")]
    pub endpoint: String,
}

/// Credentials posted to the login endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Login response body.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
}

/// Error body shape used by the backend for non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
