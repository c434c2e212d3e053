//! Background task management for the schedule fetch.
//!
//! The fetch runs in a tokio task so the UI keeps rendering while it is in
//! flight. Its result is sent through a channel that the main loop polls with
//! `try_recv()`.
//!
//! Each load owns a cancellation token. Cancelling it (on shutdown, or when a
//! reload supersedes the load) stops the fetch before its result is sent, so
//! a stale result never reaches the UI.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::api::types::Table;
use crate::api::ScheduleClient;

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// Result of a schedule load. The error is the logged description.
    TableLoaded {
        /// Sequence number of the load that produced this result.
        load_id: u64,
        result: Result<Table, String>,
    },
}

/// Spawns background tasks for async operations.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>) -> Self {
        Self { tx }
    }

    /// Spawn a task that fetches the schedule table.
    ///
    /// Returns the token that cancels this load.
    pub fn spawn_load_table(&self, client: &ScheduleClient, load_id: u64) -> CancellationToken {
        let (token, _handle) = self.spawn_load(client, load_id);
        token
    }

    fn spawn_load(
        &self,
        client: &ScheduleClient,
        load_id: u64,
    ) -> (CancellationToken, JoinHandle<()>) {
        let tx = self.tx.clone();
        let client = client.clone();
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            let result = tokio::select! {
                _ = cancelled.cancelled() => {
                    debug!(load_id, "Schedule load cancelled");
                    return;
                }
                result = client.fetch_table() => result,
            };

            let result = result.map_err(|e| {
                error!(load_id, error = %e, "Failed to load schedule");
                e.to_string()
            });

            if tx.send(ApiMessage::TableLoaded { load_id, result }).is_err() {
                debug!(load_id, "Receiver gone, dropping schedule load result");
            }
        });

        (token, handle)
    }
}

/// Create a new task channel and spawner.
///
/// Returns a tuple of (receiver, spawner). The receiver should be polled
/// in the main event loop, and the spawner should be used to spawn tasks.
pub fn create_task_channel() -> (mpsc::UnboundedReceiver<ApiMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx))
}
