//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Run API calls requested by actions on background tasks.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - All API calls are spawned on the task tracker; dispatch never waits on the network.
//! - A cancelled fetch sends nothing back.
//! - API calls are serialized by the shared client's mutex.

mod dispatcher;
mod lines;
mod session;
mod types;

pub use dispatcher::handle_side_effects;
pub use tokio_util::task::TaskTracker;
pub use types::SharedClient;
