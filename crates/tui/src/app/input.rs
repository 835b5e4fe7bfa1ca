//! Keyboard handling.
//!
//! Responsibilities:
//! - Translate key presses into actions for the current route.
//!
//! Does NOT handle:
//! - Does NOT apply navigation (returns `Action::Navigate` for `update`)
//! - Does NOT handle mouse input (see `mouse.rs`)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::app::state::Route;

impl App {
    /// Handle keyboard input - returns Action if one should be dispatched.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match self.route {
            Route::Lines => self.handle_lines_input(key),
            Route::LineDetail { .. } | Route::Conversations => match key.code {
                KeyCode::Esc => Some(Action::Navigate(Route::Lines)),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
        }
    }

    fn handle_lines_input(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::NavigateUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::NavigateDown),
            KeyCode::Char('r') => self.load_lines(false),
            KeyCode::Char('L') => Some(Action::Logout),
            KeyCode::Enter => {
                let view = self.lines_view.as_ref()?;
                view.selected_line_id().map(|id| view.select_line(id))
            }
            KeyCode::Char('1') => self.lines_view.as_mut()?.select_tab(0),
            KeyCode::Char('2') => self.lines_view.as_mut()?.select_tab(1),
            KeyCode::Left => {
                let view = self.lines_view.as_mut()?;
                let tab = view.selected_tab().checked_sub(1)?;
                view.select_tab(tab)
            }
            KeyCode::Right => {
                let view = self.lines_view.as_mut()?;
                let tab = view.selected_tab() + 1;
                view.select_tab(tab)
            }
            _ => None,
        }
    }
}
