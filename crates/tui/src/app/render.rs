//! Rendering logic for the TUI app.
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for `ListState` scrolling)

use ratatui::Frame;

use crate::app::App;
use crate::app::state::Route;
use crate::ui::screens::destination::{DestinationRenderConfig, render_destination};
use crate::ui::screens::lines::{LinesRenderConfig, render_lines};
use crate::ui::toast::render_toasts;

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let area = f.area();

        match self.route {
            Route::Lines => {
                if let Some(view) = self.lines_view.as_mut() {
                    render_lines(
                        f,
                        area,
                        LinesRenderConfig {
                            view,
                            theme: &self.theme,
                            spinner_frame: self.spinner_frame,
                        },
                    );
                }
            }
            route => render_destination(
                f,
                area,
                DestinationRenderConfig {
                    route,
                    theme: &self.theme,
                },
            ),
        }

        render_toasts(f, &self.toasts, &self.theme);
    }
}
