//! Main Linedesk API client and API methods.
//!
//! This module provides the primary [`LineClient`] for talking to the
//! Linedesk backend. It handles authentication and session management.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Session token helpers, login and logout (private module)
//! - `lines`: Line listing methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Low-level session token storage (delegated to [`crate::auth::SessionManager`])
//! - Retrying failed requests; every call is attempted once
//!
//! # Invariants
//! - API methods take `&mut self` because session auth may log in lazily
//! - The base URL never ends with a slash

pub mod builder;
mod lines;
mod session;

use crate::auth::SessionManager;

/// Linedesk REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use linedesk_client::{AuthStrategy, LineClient};
/// use secrecy::SecretString;
///
/// let mut client = LineClient::builder()
///     .base_url("https://lines.example.com".to_string())
///     .auth_strategy(AuthStrategy::ApiToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// let lines = client.list_lines().await?;
/// ```
#[derive(Debug)]
pub struct LineClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
}

impl LineClient {
    /// Create a new client builder.
    pub fn builder() -> builder::LineClientBuilder {
        builder::LineClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
