//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `state`: Routes and layout constants
//! - `lines`: The lines view (per-mount list state and load bookkeeping)
//! - `layout`: Shared layout math for rendering and mouse hit-testing
//! - `navigation`: Routing, mounting and load issuing
//! - `actions`: Action handling (`update`)
//! - `input`: Keyboard handling
//! - `mouse`: Mouse handling
//! - `render`: Rendering logic

pub mod layout;
pub mod lines;
pub mod state;

mod actions;
mod input;
mod mouse;
mod navigation;
mod render;

pub use lines::{LineRow, LinesView};
pub use mouse::calculate_list_click_index;
pub use state::{APP_BAR_HEIGHT, LOAD_FAILED_MESSAGE, NAV_HEIGHT, Route, TABS};

use crate::ui::{Theme, Toast};
use ratatui::layout::Rect;

/// Main application state.
pub struct App {
    /// The page currently shown.
    pub route: Route,
    /// The mounted lines view. `Some` exactly while `route` is `Route::Lines`.
    pub lines_view: Option<LinesView>,
    pub theme: Theme,
    pub toasts: Vec<Toast>,
    pub spinner_frame: u8,
    /// Terminal area from the last render, used for mouse hit-testing.
    pub last_area: Rect,
    pub should_quit: bool,
    /// Last load generation handed out. Monotonic across mounts.
    next_generation: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create the app on the lines route with a freshly mounted view.
    ///
    /// The mount load is not issued here; call `load_action_for_route`.
    pub fn new() -> Self {
        Self {
            route: Route::Lines,
            lines_view: Some(LinesView::new()),
            theme: Theme::default(),
            toasts: Vec::new(),
            spinner_frame: 0,
            last_area: Rect::default(),
            should_quit: false,
            next_generation: 0,
        }
    }

    fn upcoming_generation(&self) -> u64 {
        self.next_generation.wrapping_add(1)
    }
}
