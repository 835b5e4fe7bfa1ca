//! The lines view: per-mount state for the line list.
//!
//! Responsibilities:
//! - Hold the loaded lines, the error banner state and the selected tab.
//! - Track the single in-flight load and discard results that do not belong to it.
//! - Produce display rows and navigation requests.
//!
//! Does NOT handle:
//! - Does NOT perform HTTP requests (the runtime does, see `runtime::side_effects`).
//! - Does NOT render anything (see `ui::screens::lines`).
//!
//! Invariants:
//! - `lines` only ever holds the verbatim result of the most recent applied load.
//! - At most one load is in flight per mount.
//! - `error` is cleared only by a successful load.
//! - Dropping the view cancels its cancellation token.

use std::sync::Arc;

use linedesk_client::{ClientError, Line};
use ratatui::widgets::ListState;
use tokio_util::sync::CancellationToken;

use crate::action::Action;
use crate::app::state::{LOAD_FAILED_MESSAGE, Route, TABS};

/// One display row of the line list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRow<'a> {
    pub id: i64,
    /// The line's number.
    pub primary: &'a str,
    /// `sim{slot} on {device} @ {endpoint}`.
    pub secondary: String,
}

impl<'a> LineRow<'a> {
    fn from_line(line: &'a Line) -> Self {
        Self {
            id: line.id,
            primary: &line.number,
            secondary: format!(
                "sim{} on {} @ {}",
                line.sim_slot, line.device_mark, line.endpoint
            ),
        }
    }
}

/// State of one mounted lines view.
#[derive(Debug)]
pub struct LinesView {
    lines: Vec<Line>,
    error: Option<String>,
    selected_tab: usize,
    /// Keyboard selection within the list.
    pub list_state: ListState,
    in_flight: Option<u64>,
    cancel: CancellationToken,
    mount_load_issued: bool,
}

impl Default for LinesView {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinesView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl LinesView {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            error: None,
            selected_tab: 0,
            list_state: ListState::default(),
            in_flight: None,
            cancel: CancellationToken::new(),
            mount_load_issued: false,
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_tab(&self) -> usize {
        self.selected_tab
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Generation of the load currently in flight, if any.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Token that is cancelled when this mount goes away.
    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Marks the mount-triggered load as issued. Returns false if it already was.
    pub(crate) fn claim_mount_load(&mut self) -> bool {
        !std::mem::replace(&mut self.mount_load_issued, true)
    }

    /// Start a load with the given generation.
    ///
    /// Returns the `FetchLines` request for the runtime, or `None` when a load
    /// is already in flight. `reset` clears the current list first; the error
    /// banner is left alone either way.
    pub fn begin_load(&mut self, reset: bool, generation: u64) -> Option<Action> {
        if let Some(current) = self.in_flight {
            tracing::debug!(
                in_flight = current,
                "Lines load already in flight, ignoring request"
            );
            return None;
        }

        if reset {
            self.lines.clear();
            self.list_state.select(None);
        }
        self.in_flight = Some(generation);

        Some(Action::FetchLines {
            generation,
            reset,
            cancel: self.cancel.clone(),
        })
    }

    /// Apply the result of a load.
    ///
    /// Results for any generation other than the in-flight one are ignored.
    /// Returns whether the result was applied.
    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<Vec<Line>, Arc<ClientError>>,
    ) -> bool {
        if self.in_flight != Some(generation) {
            tracing::debug!(
                generation,
                in_flight = ?self.in_flight,
                "Ignoring stale lines result"
            );
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(lines) => {
                self.lines = lines;
                self.error = None;
                self.clamp_selection();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load lines");
                self.error = Some(LOAD_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    /// Display rows, one per line, in list order.
    ///
    /// The iterator is lazy and can be cloned to walk the rows again.
    pub fn rows(&self) -> impl Iterator<Item = LineRow<'_>> + Clone + '_ {
        self.lines.iter().map(LineRow::from_line)
    }

    /// Navigation request for the detail page of `line_id`.
    ///
    /// The id is not checked against the loaded lines.
    pub fn select_line(&self, line_id: i64) -> Action {
        Action::Navigate(Route::LineDetail { line_id })
    }

    /// Select a bottom navigation tab.
    ///
    /// Out-of-range indexes are ignored. Tab 1 also requests the
    /// conversations page; tab 0 only moves the indicator.
    pub fn select_tab(&mut self, tab_index: usize) -> Option<Action> {
        if tab_index >= TABS.len() {
            tracing::debug!(tab_index, "Ignoring out-of-range tab");
            return None;
        }
        self.selected_tab = tab_index;
        (tab_index == 1).then_some(Action::Navigate(Route::Conversations))
    }

    /// Id of the line under the keyboard selection.
    pub fn selected_line_id(&self) -> Option<i64> {
        self.list_state
            .selected()
            .and_then(|i| self.lines.get(i))
            .map(|line| line.id)
    }

    pub fn select_next(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.lines.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    fn clamp_selection(&mut self) {
        if self.lines.is_empty() {
            self.list_state.select(None);
            return;
        }
        let last = self.lines.len() - 1;
        let selected = self.list_state.selected().map_or(0, |i| i.min(last));
        self.list_state.select(Some(selected));
    }
}
