//! Test helpers for TUI testing.
//!
//! Key and mouse event builders plus line fixtures.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use linedesk_client::Line;
use linedesk_tui::action::Action;
use linedesk_tui::app::App;

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a Shift+char key event, as terminals report uppercase letters.
pub fn shift_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

pub fn left_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)
}

pub fn right_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)
}

/// Left click at (column, row).
pub fn click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// A line whose fields are derived from `id`.
pub fn make_line(id: i64) -> Line {
    Line {
        id,
        number: format!("555-01{id:02}"),
        sim_slot: id % 2 + 1,
        device_mark: format!("Device-{id}"),
        endpoint: format!("sip{id}.example.com"),
    }
}

/// The line used by the single-row scenario.
pub fn pixel_line() -> Line {
    Line {
        id: 1,
        number: "555-0100".to_string(),
        sim_slot: 1,
        device_mark: "Pixel-7".to_string(),
        endpoint: "sip.example.com".to_string(),
    }
}

/// Issue the mount load and return its generation.
pub fn start_mount_load(app: &mut App) -> u64 {
    match app.load_action_for_route() {
        Some(Action::FetchLines { generation, .. }) => generation,
        other => panic!("expected FetchLines, got {other:?}"),
    }
}

/// App with the mount load completed successfully with `lines`.
pub fn app_with_lines(lines: Vec<Line>) -> App {
    let mut app = App::new();
    let generation = start_mount_load(&mut app);
    app.update(Action::LinesLoaded {
        generation,
        result: Ok(lines),
    });
    app
}
