//! Shared types for side effect handlers.

use linedesk_client::LineClient;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared client for async tasks.
///
/// The mutex gives each request exclusive access, which lazy session login
/// needs (`&mut self`).
pub type SharedClient = Arc<Mutex<LineClient>>;
