//! Side effect dispatcher.
//!
//! Routes actions to their handler functions.

use std::time::Instant;

use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info_span};

use crate::action::Action;
use crate::runtime::side_effects::{SharedClient, TaskTracker, lines, session};

/// Handle side effects (async API calls) for actions.
///
/// Actions without a side effect are ignored. Handlers spawn their work on
/// `task_tracker` and return immediately.
///
/// # Arguments
///
/// * `action` - The action to handle
/// * `client` - The shared line client
/// * `tx` - The action channel sender for sending results
/// * `task_tracker` - Tracker that main waits on before exiting
/// * `shutdown` - Cancelled when the app exits; session tasks stop on it
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    shutdown: CancellationToken,
) {
    let Some(action_name) = action_type_name(&action) else {
        return;
    };
    let start = Instant::now();

    let span = info_span!(
        "tui.handle_action",
        action_type = action_name,
        duration_ms = tracing::field::Empty,
    );

    async move {
        match action {
            Action::FetchLines {
                generation,
                cancel,
                ..
            } => lines::handle_fetch_lines(client, tx, generation, cancel, &task_tracker),
            Action::Logout => session::handle_logout(client, tx, shutdown, &task_tracker),
            _ => {}
        }

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Safe action name for tracing, `None` for actions without side effects.
fn action_type_name(action: &Action) -> Option<&'static str> {
    match action {
        Action::FetchLines { .. } => Some("FetchLines"),
        Action::Logout => Some("Logout"),
        _ => None,
    }
}
