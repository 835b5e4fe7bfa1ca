//! Layout calculation for rendering and hit-testing.
//!
//! Responsibilities:
//! - Split the terminal area into app bar, error banner, list and bottom navigation.
//! - Locate the logout control and the navigation tabs.
//!
//! Does NOT handle:
//! - Does NOT render (see `ui::screens`)
//! - Does NOT handle mouse events (see `mouse.rs`)
//!
//! Invariants:
//! - Rendering and mouse hit-testing both go through these functions, so a
//!   click lands on exactly what was drawn.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::app::state::{APP_BAR_HEIGHT, NAV_HEIGHT, TABS};

/// Label of the logout control in the app bar.
pub const LOGOUT_LABEL: &str = "[ Logout ]";
/// Separator drawn between navigation tabs.
pub const TAB_DIVIDER: &str = "│";
/// Height of the error banner when shown.
pub const BANNER_HEIGHT: u16 = 1;

/// Areas of the app bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppBarLayout {
    /// Where the title text goes.
    pub title: Rect,
    /// The logout control, if there is room for it.
    pub logout: Option<Rect>,
}

impl AppBarLayout {
    /// Compute the app bar content areas inside a bordered block at `area`.
    pub fn calculate(area: Rect, with_logout: bool) -> Self {
        let inner = inner_row(area);
        let label_width = LOGOUT_LABEL.chars().count() as u16;

        if !with_logout || inner.width < label_width + 1 {
            return Self {
                title: inner,
                logout: None,
            };
        }

        let logout = Rect {
            x: inner.x + inner.width - label_width,
            y: inner.y,
            width: label_width,
            height: inner.height,
        };
        let title = Rect {
            width: inner.width - label_width,
            ..inner
        };
        Self {
            title,
            logout: Some(logout),
        }
    }

    pub fn is_logout_clicked(&self, column: u16, row: u16) -> bool {
        self.logout.is_some_and(|r| contains(r, column, row))
    }
}

/// Column ranges of the bottom navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLayout {
    /// Row the tabs are drawn on.
    pub row: u16,
    /// Half-open column range per tab, `None` when clipped away.
    pub tabs: [Option<(u16, u16)>; TABS.len()],
}

impl NavLayout {
    /// Tabs are drawn as ` Lines │ Conversations ` from the left inner edge.
    pub fn calculate(area: Rect) -> Self {
        let inner = inner_row(area);
        let right_edge = inner.x + inner.width;
        let divider = TAB_DIVIDER.chars().count() as u16;

        let mut tabs = [None; TABS.len()];
        let mut x = inner.x;
        for (i, title) in TABS.iter().enumerate() {
            let start = x;
            let end = start + title.chars().count() as u16 + 2;
            if inner.height > 0 && end <= right_edge {
                tabs[i] = Some((start, end));
            }
            x = end + divider;
        }

        Self {
            row: inner.y,
            tabs,
        }
    }

    /// Index of the tab under (column, row).
    pub fn tab_at(&self, column: u16, row: u16) -> Option<usize> {
        if row != self.row {
            return None;
        }
        self.tabs
            .iter()
            .position(|range| range.is_some_and(|(start, end)| column >= start && column < end))
    }
}

/// Full-screen layout of the lines view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinesLayout {
    pub app_bar: Rect,
    pub banner: Option<Rect>,
    /// The bordered list block.
    pub list: Rect,
    pub nav: Rect,
}

impl LinesLayout {
    pub fn calculate(area: Rect, has_error: bool) -> Self {
        let banner_height = if has_error { BANNER_HEIGHT } else { 0 };
        let [app_bar, banner, list, nav] = Layout::vertical([
            Constraint::Length(APP_BAR_HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(NAV_HEIGHT),
        ])
        .areas(area);

        Self {
            app_bar,
            banner: has_error.then_some(banner),
            list,
            nav,
        }
    }

    /// First terminal row holding list items (inside the border).
    pub fn list_data_start(&self) -> u16 {
        self.list.y + 1
    }

    /// One past the last terminal row holding list items.
    pub fn list_data_end(&self) -> u16 {
        (self.list.y + self.list.height).saturating_sub(1)
    }

    pub fn app_bar_layout(&self) -> AppBarLayout {
        AppBarLayout::calculate(self.app_bar, true)
    }

    pub fn nav_layout(&self) -> NavLayout {
        NavLayout::calculate(self.nav)
    }
}

/// The single content row inside a bordered block.
fn inner_row(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2).min(1),
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}
