//! Screen renderers and the chrome they share.

pub mod destination;
pub mod lines;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::TABS;
use crate::app::layout::{AppBarLayout, LOGOUT_LABEL, NavLayout, TAB_DIVIDER};
use crate::ui::Theme;

/// Draw the bordered app bar with `title` and, when laid out, the logout control.
pub(crate) fn render_app_bar(
    f: &mut Frame,
    area: Rect,
    layout: AppBarLayout,
    title: &str,
    theme: &Theme,
) {
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
        area,
    );
    f.render_widget(Paragraph::new(Span::styled(title, theme.title())), layout.title);
    if let Some(logout) = layout.logout {
        f.render_widget(Paragraph::new(Span::styled(LOGOUT_LABEL, theme.error())), logout);
    }
}

/// Draw the bottom navigation bar with `selected` highlighted.
pub(crate) fn render_bottom_nav(f: &mut Frame, area: Rect, selected: usize, theme: &Theme) {
    let layout = NavLayout::calculate(area);

    let mut spans = Vec::with_capacity(TABS.len() * 2);
    for (i, title) in TABS.iter().enumerate() {
        if layout.tabs[i].is_none() {
            break;
        }
        if i > 0 {
            spans.push(Span::styled(TAB_DIVIDER, theme.border()));
        }
        let style = if i == selected {
            theme.highlight()
        } else {
            theme.text_dim()
        };
        spans.push(Span::styled(format!(" {title} "), style));
    }

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );
    f.render_widget(nav, area);
}
