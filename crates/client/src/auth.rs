//! Authentication strategies and session management.

use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with the backend.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password authentication.
    /// The client logs in lazily and caches the returned session token.
    SessionToken {
        username: String,
        password: SecretString,
    },
    /// Static API token sent as a bearer token.
    ApiToken { token: SecretString },
}

/// Holds the auth strategy and the cached session token, if any.
#[derive(Debug)]
pub struct SessionManager {
    auth_strategy: AuthStrategy,
    session_token: Option<SecretString>,
}

impl SessionManager {
    /// Create a new session manager with the given auth strategy.
    pub fn new(strategy: AuthStrategy) -> Self {
        Self {
            auth_strategy: strategy,
            session_token: None,
        }
    }

    /// Get the current auth strategy.
    pub fn strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    /// Check if we're using API token auth (no session management needed).
    pub fn is_api_token(&self) -> bool {
        matches!(self.auth_strategy, AuthStrategy::ApiToken { .. })
    }

    /// Get the bearer token for API requests.
    /// For API token auth, returns the token directly.
    /// For session auth, returns the session token if one has been obtained.
    pub fn get_bearer_token(&self) -> Option<&str> {
        match &self.auth_strategy {
            AuthStrategy::ApiToken { token } => Some(token.expose_secret()),
            AuthStrategy::SessionToken { .. } => {
                self.session_token.as_ref().map(|t| t.expose_secret())
            }
        }
    }

    /// Whether a session token is cached. Always true for API token auth.
    pub fn has_session(&self) -> bool {
        self.is_api_token() || self.session_token.is_some()
    }

    /// Store the session token received from a login response.
    pub fn set_session_token(&mut self, token: String) {
        self.session_token = Some(SecretString::new(token.into()));
    }

    /// Clear the current session token (force re-authentication).
    pub fn clear_session(&mut self) {
        self.session_token = None;
    }

    /// Username for session auth, used in error messages.
    pub fn username(&self) -> &str {
        match &self.auth_strategy {
            AuthStrategy::SessionToken { username, .. } => username,
            AuthStrategy::ApiToken { .. } => "api-token",
        }
    }
}
