//! Linedesk backend API client.
//!
//! This crate provides a type-safe client for the Linedesk backend REST API:
//! listing the lines (SIM-slot bound phone numbers) known to the server and
//! managing the authenticated session. It supports both static API token and
//! username/password session authentication.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use auth::{AuthStrategy, SessionManager};
pub use client::LineClient;
pub use client::builder::LineClientBuilder;
pub use error::{ClientError, Result};
pub use models::Line;
