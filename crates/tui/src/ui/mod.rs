//! UI rendering modules for the TUI.
//!
//! Screen-specific rendering lives here, separate from app state management.

pub mod screens;
pub mod theme;
pub mod toast;

pub use theme::Theme;
pub use toast::{Toast, ToastLevel};
