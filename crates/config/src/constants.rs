//! Centralized constants for the Linedesk workspace.
//!
//! Default values shared across crates, kept here to avoid magic numbers.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// UI Defaults
// =============================================================================

/// Capacity of the TUI action channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// UI tick interval in milliseconds (spinner animation).
pub const DEFAULT_UI_TICK_MS: u64 = 250;

// =============================================================================
// Environment & Paths
// =============================================================================

/// Application name used for the platform config directory.
pub const APP_NAME: &str = "linedesk";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";
