//! Destination pages reached from the lines view.
//!
//! The line detail and conversations pages show where navigation landed and
//! how to get back.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::Route;
use crate::app::layout::AppBarLayout;
use crate::app::state::APP_BAR_HEIGHT;
use crate::ui::Theme;
use crate::ui::screens::render_app_bar;

pub struct DestinationRenderConfig<'a> {
    pub route: Route,
    pub theme: &'a Theme,
}

pub fn render_destination(f: &mut Frame, area: Rect, config: DestinationRenderConfig) {
    let DestinationRenderConfig { route, theme } = config;

    let [app_bar, body] =
        Layout::vertical([Constraint::Length(APP_BAR_HEIGHT), Constraint::Min(0)]).areas(area);

    render_app_bar(
        f,
        app_bar,
        AppBarLayout::calculate(app_bar, false),
        &route.title(),
        theme,
    );

    let text = vec![
        Line::from(vec![
            Span::styled("Route: ", theme.text_dim()),
            Span::styled(route.path(), theme.text()),
        ]),
        Line::default(),
        Line::styled("Esc: back to lines   q: quit", theme.text_dim()),
    ];
    f.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        ),
        body,
    );
}
