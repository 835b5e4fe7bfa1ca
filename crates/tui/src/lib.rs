//! Linedesk TUI Library
//!
//! Application state, input handling, rendering and the async runtime for
//! the Linedesk terminal client.
//!
//! # Example
//!
//! ```rust
//! use linedesk_tui::{App, Action};
//! use crossterm::event::KeyEvent;
//!
//! let mut app = App::new();
//! if let Some(action) = app.handle_input(KeyEvent::from(crossterm::event::KeyCode::Char('q'))) {
//!     assert!(matches!(action, Action::Quit));
//! }
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

pub use action::Action;
pub use app::{App, Route};
pub use ui::{Toast, ToastLevel};
