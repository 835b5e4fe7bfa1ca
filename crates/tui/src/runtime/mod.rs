//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Client creation
//! - Configuration loading
//! - Async side effect handlers for API calls
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `linedesk_tui::app` and `linedesk_tui::ui`).
//! - Wire-level API details (see `linedesk_client`).
//!
//! Invariants:
//! - Side effects run in separate tokio tasks to avoid blocking the UI.

pub mod client;
pub mod config;
pub mod side_effects;
pub mod terminal;
