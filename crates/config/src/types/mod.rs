//! Configuration types.

mod auth;
mod connection;
mod profile;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
pub use profile::{ConfigFile, ProfileConfig};
