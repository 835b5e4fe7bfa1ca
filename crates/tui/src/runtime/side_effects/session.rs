//! Session side effect handler.

use std::sync::Arc;

use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;

use super::{SharedClient, TaskTracker};
use crate::action::Action;

/// Terminate the session and report the outcome as `LoggedOut`.
///
/// The request is abandoned when `shutdown` fires, so quitting never waits
/// on a slow logout.
pub fn handle_logout(
    client: SharedClient,
    tx: Sender<Action>,
    shutdown: CancellationToken,
    task_tracker: &TaskTracker,
) {
    task_tracker.spawn(async move {
        let result = tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                tracing::debug!("Logout abandoned on shutdown");
                return;
            }
            result = async {
                let mut c = client.lock().await;
                c.logout().await
            } => result,
        };
        let _ = tx.send(Action::LoggedOut(result.map_err(Arc::new))).await;
    });
}
