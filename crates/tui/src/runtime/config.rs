//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load configuration with CLI and environment variable overrides.
//!
//! Does NOT handle:
//! - Creating the client (see `runtime::client`).
//!
//! Invariants:
//! - Precedence: CLI args > env vars > profile config > defaults.
//! - `.env` is loaded before anything else is read.

use anyhow::{Context, Result};
use linedesk_config::{Config, ConfigLoader};

use crate::cli::Cli;

/// Resolve the runtime configuration from CLI arguments, environment and profile file.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?;

    if let Some(config_path) = &cli.config_path {
        loader = loader.with_config_path(config_path.clone());
    }
    if let Some(profile) = &cli.profile {
        loader = loader.with_profile_name(profile.clone());
    }

    loader
        .from_profile()
        .context("Failed to load profile")?
        .from_env()
        .context("Failed to read environment")?
        .build()
        .context("Invalid configuration")
}
