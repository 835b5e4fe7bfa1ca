//! Configuration management for Linedesk.
//!
//! This crate provides types and loaders for the backend connection
//! configuration, read from builder values, environment variables and JSON
//! profile files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConfigFile, ConnectionConfig, ProfileConfig};
