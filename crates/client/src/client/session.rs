//! Client-level session helpers.
//!
//! # Invariants
//! - [`LineClient::get_auth_token`] may trigger a login call, hence `&mut self`
//! - API token authentication never triggers login
//! - After [`LineClient::logout`] no session token is cached, whatever the outcome

use secrecy::ExposeSecret;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::client::LineClient;
use crate::endpoints;
use crate::error::{ClientError, Result};

impl LineClient {
    /// Get the current authentication token, logging in if necessary.
    ///
    /// # Errors
    ///
    /// Returns the login error if the login request fails.
    /// Returns [`ClientError::SessionExpired`] if no token is available afterwards.
    pub(crate) async fn get_auth_token(&mut self) -> Result<String> {
        if !self.session_manager.has_session() {
            self.login().await?;
        }

        self.session_manager
            .get_bearer_token()
            .map(|s| s.to_string())
            .ok_or_else(|| ClientError::SessionExpired {
                username: self.session_manager.username().to_string(),
            })
    }

    /// Check if the client is using API token authentication.
    pub fn is_api_token_auth(&self) -> bool {
        self.session_manager.is_api_token()
    }

    /// Login with username/password and cache the session token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] if the auth strategy is not session-based.
    pub async fn login(&mut self) -> Result<String> {
        if let AuthStrategy::SessionToken { username, password } = self.session_manager.strategy() {
            let token = endpoints::login(
                &self.http,
                &self.base_url,
                username,
                password.expose_secret(),
            )
            .await?;

            self.session_manager.set_session_token(token.clone());
            Ok(token)
        } else {
            Err(ClientError::AuthFailed(
                "Cannot login with API token auth strategy".to_string(),
            ))
        }
    }

    /// Terminate the current session on the backend.
    ///
    /// Session auth with no cached token has nothing to terminate and
    /// returns `Ok` without a request.
    pub async fn logout(&mut self) -> Result<()> {
        let Some(token) = self.session_manager.get_bearer_token().map(str::to_string) else {
            debug!("No active session, skipping logout request");
            return Ok(());
        };

        let result = endpoints::logout(&self.http, &self.base_url, &token).await;
        self.session_manager.clear_session();
        result
    }
}
