//! Line client creation.
//!
//! Does NOT handle:
//! - Configuration loading (see `runtime::config`).
//!
//! Session-token configs do not log in here; the client logs in lazily on
//! the first request.

use anyhow::{Context, Result};
use linedesk_client::LineClient;
use linedesk_config::Config;

use crate::runtime::side_effects::SharedClient;

/// Build a client from configuration.
pub fn create_client(config: &Config) -> Result<LineClient> {
    LineClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build line client")
}

/// Build a client and wrap it for sharing with side-effect tasks.
pub fn create_shared_client(config: &Config) -> Result<SharedClient> {
    let client = create_client(config)?;
    Ok(std::sync::Arc::new(tokio::sync::Mutex::new(client)))
}
