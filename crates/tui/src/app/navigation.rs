//! Routing, mounting and load issuing.
//!
//! Responsibilities:
//! - Switch routes, mounting and unmounting the lines view.
//! - Issue line loads with fresh generations.
//!
//! Does NOT handle:
//! - Does NOT spawn requests (returns `Action::FetchLines` for the runtime)

use crate::action::Action;
use crate::app::App;
use crate::app::lines::LinesView;
use crate::app::state::Route;

impl App {
    /// Transition to `route`.
    ///
    /// Leaving the lines route unmounts the view, which cancels its in-flight
    /// load. Entering it mounts a fresh view whose mount load is still pending
    /// (see `load_action_for_route`).
    pub fn navigate(&mut self, route: Route) {
        if self.route == route {
            return;
        }
        tracing::debug!(from = %self.route.path(), to = %route.path(), "Navigating");

        if route == Route::Lines {
            self.lines_view = Some(LinesView::new());
        } else {
            self.unmount_lines_view();
        }
        self.route = route;
    }

    /// Drop the lines view, cancelling whatever it has in flight.
    pub(crate) fn unmount_lines_view(&mut self) {
        if let Some(view) = self.lines_view.take() {
            tracing::debug!(in_flight = ?view.in_flight(), "Unmounting lines view");
        }
    }

    /// Issue a load for the mounted lines view.
    ///
    /// Returns `None` when no view is mounted or a load is already in flight.
    pub fn load_lines(&mut self, reset: bool) -> Option<Action> {
        let generation = self.upcoming_generation();
        let action = self.lines_view.as_mut()?.begin_load(reset, generation)?;
        self.next_generation = generation;
        Some(action)
    }

    /// The load owed to the current route, if it has not been issued yet.
    ///
    /// On the lines route this is the mount load (`reset = true`), issued
    /// once per mount.
    pub fn load_action_for_route(&mut self) -> Option<Action> {
        if self.route != Route::Lines {
            return None;
        }
        if !self.lines_view.as_mut()?.claim_mount_load() {
            return None;
        }
        self.load_lines(true)
    }

    pub(crate) fn next_item(&mut self) {
        if let Some(view) = self.lines_view.as_mut() {
            view.select_next();
        }
    }

    pub(crate) fn previous_item(&mut self) {
        if let Some(view) = self.lines_view.as_mut() {
            view.select_previous();
        }
    }
}
