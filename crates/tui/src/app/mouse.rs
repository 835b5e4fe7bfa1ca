//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Handle wheel scrolling of the line list
//! - Handle clicks on list rows, navigation tabs and the logout control
//!
//! Does NOT handle:
//! - Does NOT handle keyboard input
//! - Does NOT render the UI

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::App;
use crate::app::layout::LinesLayout;
use crate::app::state::Route;
use crate::ui::screens::lines::ROWS_PER_LINE;

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if self.route != Route::Lines {
            return None;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::NavigateUp),
            MouseEventKind::ScrollDown => Some(Action::NavigateDown),
            MouseEventKind::Down(MouseButton::Left) => self.handle_lines_click(mouse.column, mouse.row),
            _ => None,
        }
    }

    fn handle_lines_click(&mut self, column: u16, row: u16) -> Option<Action> {
        let view = self.lines_view.as_mut()?;
        let layout = LinesLayout::calculate(self.last_area, view.error().is_some());

        if layout.app_bar_layout().is_logout_clicked(column, row) {
            return Some(Action::Logout);
        }

        if let Some(tab) = layout.nav_layout().tab_at(column, row) {
            return view.select_tab(tab);
        }

        let data_start = layout.list_data_start();
        if row >= data_start && row < layout.list_data_end() {
            let item_row = data_start + (row - data_start) / ROWS_PER_LINE;
            let index = calculate_list_click_index(
                item_row,
                data_start,
                view.list_state.offset(),
                view.lines().len(),
            )?;
            let id = view.lines().get(index)?.id;
            return Some(view.select_line(id));
        }

        None
    }
}

/// Calculate the data index from a click row for a plain list.
/// `click_row` is in item units (one row per item) relative to the terminal.
/// Returns None if the click is outside the data area.
pub fn calculate_list_click_index(
    click_row: u16,
    data_start_row: u16,
    offset: usize,
    total_items: usize,
) -> Option<usize> {
    if click_row < data_start_row {
        return None;
    }
    let index = offset + (click_row - data_start_row) as usize;
    (index < total_items).then_some(index)
}
