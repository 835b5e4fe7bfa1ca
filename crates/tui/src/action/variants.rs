//! Action enum definitions for the TUI event system.
//!
//! # Action Categories
//!
//! - **System**: Application lifecycle (Quit, Tick, Resize)
//! - **Input**: Raw keyboard and mouse events, list navigation
//! - **API Triggers**: Requests for the side-effect runtime (FetchLines, Logout)
//! - **API Results**: Async responses from the backend (LinesLoaded, LoggedOut)
//! - **Routing**: Page transitions (Navigate)
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by the app state machine)
//! - Async task execution (handled by the runtime module)

use crossterm::event::{KeyEvent, MouseEvent};
use linedesk_client::{ClientError, Line};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::app::Route;

/// Unified action type for async TUI event handling.
///
/// Errors are wrapped in `Arc` so the enum stays `Clone`.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Periodic UI tick (spinner, toast expiry)
    Tick,
    /// Terminal was resized to (width, height)
    Resize(u16, u16),

    // Input
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Raw mouse input event
    Mouse(MouseEvent),
    /// Move the list selection down
    NavigateDown,
    /// Move the list selection up
    NavigateUp,

    // API Triggers
    /// Fetch the line list for the mounted lines view.
    ///
    /// `generation` identifies this load; `cancel` belongs to the mount that
    /// issued it and is cancelled when that mount goes away. `reset` is
    /// informational: the view has already cleared its list when it is set,
    /// and the runtime only carries it into logs.
    FetchLines {
        generation: u64,
        reset: bool,
        cancel: CancellationToken,
    },
    /// Terminate the backend session
    Logout,

    // API Results
    /// Result of a `FetchLines` request
    LinesLoaded {
        generation: u64,
        result: Result<Vec<Line>, Arc<ClientError>>,
    },
    /// Result of a `Logout` request
    LoggedOut(Result<(), Arc<ClientError>>),

    // Routing
    /// Transition to another page
    Navigate(Route),
}
