//! Common test utilities for TUI side effects tests.
//!
//! Uses wiremock to stand in for the Linedesk backend.
//!
//! # Invariants
//! - Each test gets its own mock server, action channel and task tracker.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;

pub use linedesk_client::{AuthStrategy, LineClient};
pub use linedesk_tui::action::Action;
pub use linedesk_tui::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test harness for side effects testing.
pub struct SideEffectsTestHarness {
    pub mock_server: MockServer,
    pub action_rx: Receiver<Action>,
    pub action_tx: Sender<Action>,
    pub client: SharedClient,
    pub task_tracker: TaskTracker,
    pub shutdown: CancellationToken,
}

impl SideEffectsTestHarness {
    /// Create a new harness with a mock server and fresh channels.
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        let client = create_test_client(&mock_server.uri());

        Self {
            mock_server,
            action_rx,
            action_tx,
            client,
            task_tracker: TaskTracker::new(),
            shutdown: CancellationToken::new(),
        }
    }

    /// Call `handle_side_effects`, asserting it returns without waiting on the network.
    pub async fn handle(&self, action: Action) {
        let handle_future = handle_side_effects(
            action,
            self.client.clone(),
            self.action_tx.clone(),
            self.task_tracker.clone(),
            self.shutdown.clone(),
        );
        if tokio::time::timeout(Duration::from_millis(100), handle_future)
            .await
            .is_err()
        {
            panic!("handle_side_effects timed out - it may be blocking on network I/O");
        }
    }

    /// Expect an action within a timeout.
    pub async fn expect_action(&mut self, timeout_ms: u64) -> Action {
        tokio::time::timeout(Duration::from_millis(timeout_ms), self.action_rx.recv())
            .await
            .expect("Timeout waiting for action")
            .expect("Channel closed while waiting for action")
    }

    /// Close the tracker, wait for every spawned task, then drain the channel.
    pub async fn finish(&mut self) -> Vec<Action> {
        self.task_tracker.close();
        tokio::time::timeout(Duration::from_secs(5), self.task_tracker.wait())
            .await
            .expect("Spawned tasks did not finish");

        let mut actions = Vec::new();
        while let Ok(action) = self.action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }
}

/// Create a shared client with API token auth pointing to the mock server.
pub fn create_test_client(mock_uri: &str) -> SharedClient {
    let client = LineClient::builder()
        .base_url(mock_uri.to_string())
        .auth_strategy(AuthStrategy::ApiToken {
            token: secrecy::SecretString::new("test-token".to_string().into()),
        })
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test client");

    Arc::new(Mutex::new(client))
}

/// JSON body with the lines `[1, 2]`; the second uses the `addr` spelling.
pub fn two_lines_body() -> serde_json::Value {
    serde_json::json!([
        {"id": 1, "number": "555-0100", "sim_slot": 1, "device_mark": "Pixel-7", "endpoint": "sip.example.com"},
        {"id": 2, "number": "555-0101", "sim_slot": 2, "device_mark": "Moto", "addr": "10.0.0.5:5060"}
    ])
}
