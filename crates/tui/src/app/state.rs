//! Routes and layout constants.
//!
//! Does NOT handle:
//! - Does NOT perform navigation (see `navigation.rs`)

/// Height of the app bar (bordered, one content row).
pub const APP_BAR_HEIGHT: u16 = 3;
/// Height of the bottom navigation bar (bordered, one content row).
pub const NAV_HEIGHT: u16 = 3;

/// Message shown in the error banner after any failed load.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load lines.";

/// Bottom navigation entries, in tab-index order.
pub const TABS: [&str; 2] = ["Lines", "Conversations"];

/// Pages the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The line list (`/lines`).
    Lines,
    /// Detail page for a single line (`/line/{id}`).
    LineDetail { line_id: i64 },
    /// Conversations page, the root route (`/`).
    Conversations,
}

impl Route {
    /// Path form of the route.
    pub fn path(&self) -> String {
        match self {
            Self::Lines => "/lines".to_string(),
            Self::LineDetail { line_id } => format!("/line/{line_id}"),
            Self::Conversations => "/".to_string(),
        }
    }

    /// App bar title for the route.
    pub fn title(&self) -> String {
        match self {
            Self::Lines => "Lines".to_string(),
            Self::LineDetail { line_id } => format!("Line {line_id}"),
            Self::Conversations => "Conversations".to_string(),
        }
    }
}
