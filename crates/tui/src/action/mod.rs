//! Action protocol for async TUI event handling.
//!
//! Actions represent both user inputs and the results of async API calls.
//! They flow through one `tokio::sync::mpsc` channel into `App::update`.
//!
//! # Module Structure
//!
//! - `redaction`: Security-focused logging wrapper (`RedactedAction`)
//! - `variants`: Action enum definitions (`Action`)
//!
//! # Security Note
//!
//! When logging Actions, use `RedactedAction(&action)` instead of `?action`
//! so line numbers and backend error text stay out of log files.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by `App`)
//! - Async task execution (handled by the runtime module)
//! - UI rendering (handled by the ui module)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::Action;

#[cfg(test)]
mod tests;
