//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on exit, even during panics.
//!
//! Does NOT handle:
//! - Initial terminal setup (done in `main.rs`).
//!
//! Invariants:
//! - Must be created after terminal setup is complete and live for the whole session.
//! - Drop must not panic.

use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Guard that restores raw mode, the alternate screen and mouse capture on drop.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// `no_mouse` records whether mouse capture was left disabled during setup.
    pub fn new(no_mouse: bool) -> Self {
        Self { no_mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored; main() already restored the terminal on a normal exit.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}
