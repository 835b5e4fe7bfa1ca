//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Apply actions to application state (`update`).
//!
//! Does NOT handle:
//! - Does NOT perform async operations (see `runtime::side_effects`)
//! - Does NOT translate raw input (see `input.rs` and `mouse.rs`)

use ratatui::layout::Rect;

use crate::action::Action;
use crate::app::App;
use crate::ui::Toast;

impl App {
    /// Handle an action and update state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.unmount_lines_view();
                self.should_quit = true;
            }
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.toasts.retain(|t| !t.is_expired());
            }
            Action::Resize(width, height) => {
                self.last_area = Rect::new(0, 0, width, height);
            }
            Action::NavigateDown => self.next_item(),
            Action::NavigateUp => self.previous_item(),
            Action::LinesLoaded { generation, result } => match self.lines_view.as_mut() {
                Some(view) => {
                    view.finish_load(generation, result);
                }
                None => {
                    tracing::debug!(generation, "Dropping lines result for unmounted view");
                }
            },
            Action::Navigate(route) => self.navigate(route),
            Action::LoggedOut(Ok(())) => {
                tracing::info!("Session terminated, exiting");
                self.unmount_lines_view();
                self.should_quit = true;
            }
            Action::LoggedOut(Err(e)) => {
                tracing::warn!(error = %e, "Logout failed");
                self.toasts.push(Toast::error(format!("Logout failed: {e}")));
            }
            // Handled by the input layer or the side-effect runtime.
            Action::Input(_) | Action::Mouse(_) | Action::FetchLines { .. } | Action::Logout => {}
        }
    }
}
