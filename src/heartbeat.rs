use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;

use crate::payload::opcode;
use crate::session::SessionState;

/// Periodic heartbeat for one connection. Holds the spawned task and aborts
/// it on drop, so the timer can never outlive the socket it beats for.
pub struct Heartbeat {
    handle: JoinHandle<()>,
}

impl Heartbeat {
    /// Spawn the heartbeat task. Every `interval_ms` it sends a HEARTBEAT
    /// frame carrying the current sequence cursor (explicit null before the
    /// first dispatch). A failed channel send means the connection is gone
    /// and the task stops.
    pub fn start(
        interval_ms: u64,
        session: Arc<RwLock<SessionState>>,
        tx: mpsc::UnboundedSender<String>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
            // The first tick completes immediately; the server expects the
            // first beat one full interval after HELLO.
            interval.tick().await;
            loop {
                interval.tick().await;
                let seq = session.read().await.last_seq;
                let frame = serde_json::json!({ "op": opcode::HEARTBEAT, "s": seq });
                if tx.send(frame.to_string()).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for Heartbeat {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
