//! Line list side effect handler.
//!
//! Does NOT handle:
//! - Deciding whether a result is stale (the view compares generations).

use std::sync::Arc;

use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;

use super::{SharedClient, TaskTracker};
use crate::action::Action;

/// Fetch the line list and report it as `LinesLoaded { generation, .. }`.
///
/// If `cancel` fires first (the view was unmounted), the request is dropped
/// and nothing is sent.
pub fn handle_fetch_lines(
    client: SharedClient,
    tx: Sender<Action>,
    generation: u64,
    cancel: CancellationToken,
    task_tracker: &TaskTracker,
) {
    task_tracker.spawn(async move {
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!(generation, "Lines fetch cancelled");
                return;
            }
            result = async {
                let mut c = client.lock().await;
                c.list_lines().await
            } => result,
        };

        if cancel.is_cancelled() {
            tracing::debug!(generation, "Lines fetch finished after cancellation, dropping");
            return;
        }

        let _ = tx
            .send(Action::LinesLoaded {
                generation,
                result: result.map_err(Arc::new),
            })
            .await;
    });
}
