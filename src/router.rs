use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};

use crate::config::GatewayConfig;
use crate::handshake;
use crate::heartbeat::Heartbeat;
use crate::payload::{self, opcode, GatewayEvent, Payload};
use crate::session::SessionState;
use crate::traits::EventSink;
use crate::user::{self, User};

/// Fallback when HELLO arrives without an interval. Should not happen with
/// a conforming gateway.
const DEFAULT_HEARTBEAT_INTERVAL_MS: u64 = 45_000;

/// Where the connection is in its handshake lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHello,
    Handshaking,
    Connected,
}

/// Verdict handed back to the supervisor after each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Close,
}

/// Per-connection frame router. Owns the heartbeat for its connection, so
/// dropping the router tears the timer down with the socket.
pub struct Router {
    config: GatewayConfig,
    session: Arc<RwLock<SessionState>>,
    current_user: Arc<RwLock<Option<User>>>,
    sink: Arc<dyn EventSink>,
    tx: mpsc::UnboundedSender<String>,
    phase: Phase,
    heartbeat: Option<Heartbeat>,
}

impl Router {
    pub fn new(
        config: GatewayConfig,
        session: Arc<RwLock<SessionState>>,
        current_user: Arc<RwLock<Option<User>>>,
        sink: Arc<dyn EventSink>,
        tx: mpsc::UnboundedSender<String>,
    ) -> Self {
        Self {
            config,
            session,
            current_user,
            sink,
            tx,
            phase: Phase::AwaitingHello,
            heartbeat: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn heartbeat_running(&self) -> bool {
        self.heartbeat.is_some()
    }

    /// Classify one inbound text frame and apply it. Frames arrive in order
    /// on a single stream; the cursor always reflects the latest dispatch.
    pub async fn handle_frame(&mut self, text: &str) -> Flow {
        let frame: Payload = match serde_json::from_str(text) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("dropping malformed gateway frame: {e}");
                return Flow::Continue;
            }
        };

        match frame.op {
            opcode::HELLO => self.on_hello(&frame).await,
            opcode::DISPATCH => self.on_dispatch(frame).await,
            opcode::HEARTBEAT_ACK => Flow::Continue,
            opcode::INVALID_SESSION => {
                self.session.write().await.reset();
                tracing::warn!("offline: invalid session");
                Flow::Close
            }
            opcode::RECONNECT => {
                tracing::warn!("offline: server requested reconnect");
                Flow::Close
            }
            op => {
                tracing::debug!("ignoring frame with unexpected opcode {op}");
                Flow::Continue
            }
        }
    }

    /// HELLO: answer with IDENTIFY or RESUME and start the heartbeat at the
    /// interval the server dictated.
    async fn on_hello(&mut self, frame: &Payload) -> Flow {
        if self.phase != Phase::AwaitingHello {
            tracing::debug!("ignoring repeated HELLO");
            return Flow::Continue;
        }

        let reply = handshake::hello_reply(&self.config, &*self.session.read().await);
        if self.tx.send(reply).is_err() {
            return Flow::Close;
        }

        let interval_ms = frame
            .d
            .as_ref()
            .and_then(|d| d.get("heartbeat_interval"))
            .and_then(|v| v.as_u64())
            .unwrap_or(DEFAULT_HEARTBEAT_INTERVAL_MS);
        self.heartbeat = Some(Heartbeat::start(
            interval_ms,
            self.session.clone(),
            self.tx.clone(),
        ));
        self.phase = Phase::Handshaking;
        Flow::Continue
    }

    async fn on_dispatch(&mut self, frame: Payload) -> Flow {
        self.session.write().await.advance(None, frame.s);

        let tag = frame.t.clone().unwrap_or_default();
        self.sink
            .dispatch(GatewayEvent {
                kind: payload::event_kind(&tag),
                payload: frame.clone(),
            })
            .await;

        match tag.as_str() {
            "READY" => {
                let d = frame.d.as_ref();
                let session_id = d.and_then(|d| d.get("session_id")).and_then(|v| v.as_str());
                self.session.write().await.advance(session_id, None);
                if let Some(raw) = d.and_then(|d| d.get("user")) {
                    *self.current_user.write().await = user::decode_user(raw);
                }
                self.mark_connected().await;
            }
            "RESUMED" => {
                self.mark_connected().await;
            }
            _ => {}
        }
        Flow::Continue
    }

    async fn mark_connected(&mut self) {
        if self.phase != Phase::Connected {
            self.phase = Phase::Connected;
            self.sink.online().await;
        }
    }
}
