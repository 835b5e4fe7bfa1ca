//! REST API endpoint implementations.
//!
//! Each function here is a single HTTP call against the backend. They take
//! the shared `reqwest::Client`, the normalized base URL and (where needed)
//! a bearer token, and know nothing about session state.

mod auth;
mod lines;
mod request;

pub use auth::{login, logout};
pub use lines::list_lines;
pub use request::send_request;
