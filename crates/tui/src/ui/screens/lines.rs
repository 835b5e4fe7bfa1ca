//! Lines screen rendering.
//!
//! Renders the app bar with the logout control, the error banner, the line
//! list (two text rows per line) and the bottom navigation.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::LinesView;
use crate::app::layout::LinesLayout;
use crate::ui::Theme;
use crate::ui::screens::{render_app_bar, render_bottom_nav};
use crate::ui::theme::spinner_char;

/// Terminal rows per list entry: number, then slot/device/endpoint.
pub const ROWS_PER_LINE: u16 = 2;

/// Configuration for rendering the lines screen.
pub struct LinesRenderConfig<'a> {
    pub view: &'a mut LinesView,
    pub theme: &'a Theme,
    /// Current spinner frame for the loading indicator.
    pub spinner_frame: u8,
}

/// Render the lines screen into `area`.
pub fn render_lines(f: &mut Frame, area: Rect, config: LinesRenderConfig) {
    let LinesRenderConfig {
        view,
        theme,
        spinner_frame,
    } = config;

    let layout = LinesLayout::calculate(area, view.error().is_some());

    render_app_bar(f, layout.app_bar, layout.app_bar_layout(), "Lines", theme);

    if let (Some(banner), Some(message)) = (layout.banner, view.error()) {
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {message}"), theme.error())),
            banner,
        );
    }

    let title = if view.is_loading() {
        format!(" Lines {} ", spinner_char(spinner_frame))
    } else {
        format!(" Lines ({}) ", view.lines().len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(theme.border())
        .title_style(theme.title());

    if view.lines().is_empty() {
        let placeholder = if view.is_loading() {
            "Loading lines..."
        } else {
            "No lines. Press 'r' to refresh."
        };
        f.render_widget(
            Paragraph::new(Span::styled(placeholder, theme.text_dim()))
                .block(block)
                .alignment(Alignment::Center),
            layout.list,
        );
    } else {
        let items: Vec<ListItem> = view
            .rows()
            .map(|row| {
                ListItem::new(Text::from(vec![
                    Line::styled(row.primary.to_string(), theme.text()),
                    Line::styled(row.secondary, theme.text_dim()),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(theme.highlight())
            .highlight_symbol("> ");
        f.render_stateful_widget(list, layout.list, &mut view.list_state);
    }

    render_bottom_nav(f, layout.nav, view.selected_tab(), theme);
}
