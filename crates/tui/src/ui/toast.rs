//! Toast notifications for transient feedback messages.
//!
//! Toasts are drawn in the bottom-right corner above the navigation bar and
//! expire after a level-dependent TTL.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::time::{Duration, Instant};

use crate::app::{APP_BAR_HEIGHT, NAV_HEIGHT};
use crate::ui::Theme;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

impl ToastLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Error => "ERR",
        }
    }

    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info => Duration::from_secs(5),
            Self::Error => Duration::from_secs(10),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }

    /// Returns true if this toast has expired (TTL elapsed).
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Maximum number of toasts shown at once; the most recent win.
const MAX_TOASTS: usize = 3;
const TOAST_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 50;

/// Renders active toasts stacked in the bottom-right corner.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<&Toast> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let active = &active[active.len().saturating_sub(MAX_TOASTS)..];

    let area = f.area();
    let total_height = active.len() as u16 * TOAST_HEIGHT;
    if area.height < APP_BAR_HEIGHT + NAV_HEIGHT + total_height || area.width < TOAST_WIDTH + 2 {
        return;
    }

    let toast_area = Rect {
        x: area.width - TOAST_WIDTH - 1,
        y: area.height - NAV_HEIGHT - total_height,
        width: TOAST_WIDTH,
        height: total_height,
    };
    let chunks = Layout::vertical(
        std::iter::repeat_n(Constraint::Length(TOAST_HEIGHT), active.len()).collect::<Vec<_>>(),
    )
    .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let style = match toast.level {
        ToastLevel::Info => theme.info(),
        ToastLevel::Error => theme.error(),
    };

    let max_chars = area.width.saturating_sub(4 + toast.level.label().len() as u16) as usize;
    let message: String = if toast.message.chars().count() > max_chars {
        let kept: String = toast.message.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        toast.message.clone()
    };

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", toast.level.label()), style),
        Span::styled(message, theme.text()),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(style));

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_toast_expiration() {
        let toast = Toast::info("fresh");
        assert!(!toast.is_expired());

        let mut expired = Toast::error("old");
        expired.ttl = Duration::from_millis(1);
        expired.created_at = Instant::now() - Duration::from_secs(1);
        assert!(expired.is_expired());
    }

    #[test]
    fn test_toast_level_ttl() {
        assert_eq!(ToastLevel::Info.ttl(), Duration::from_secs(5));
        assert_eq!(ToastLevel::Error.ttl(), Duration::from_secs(10));
    }

    #[test]
    fn test_render_error_toast() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let toasts = vec![Toast::error("Logout failed")];
        terminal
            .draw(|f| render_toasts(f, &toasts, &Theme::default()))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("ERR Logout failed"));
    }

    #[test]
    fn test_render_skips_when_too_small() {
        let backend = TestBackend::new(30, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let toasts = vec![Toast::error("Logout failed")];
        terminal
            .draw(|f| render_toasts(f, &toasts, &Theme::default()))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(!content.contains("Logout"));
    }
}
