use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::{mpsc, RwLock};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::Instrument;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::resolver::HttpGatewayResolver;
use crate::router::{Flow, Router};
use crate::session::SessionState;
use crate::traits::{EventSink, GatewayUrlResolver};
use crate::user::User;

const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Supervises the single logical gateway connection: discover the URL, open
/// the socket, drive the frame loop, tear down, reconnect.
pub struct GatewayClient {
    config: GatewayConfig,
    resolver: Arc<dyn GatewayUrlResolver>,
    sink: Arc<dyn EventSink>,
    session: Arc<RwLock<SessionState>>,
    current_user: Arc<RwLock<Option<User>>>,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig, sink: Arc<dyn EventSink>) -> Self {
        let resolver = Arc::new(HttpGatewayResolver::new(
            config.api_base.clone(),
            config.authorization(),
        ));
        Self {
            config,
            resolver,
            sink,
            session: Arc::new(RwLock::new(SessionState::default())),
            current_user: Arc::new(RwLock::new(None)),
        }
    }

    /// Swap in a different gateway URL resolver.
    pub fn with_resolver(mut self, resolver: Arc<dyn GatewayUrlResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Current session identity and cursor.
    pub async fn session_snapshot(&self) -> SessionState {
        self.session.read().await.clone()
    }

    /// The bot's own identity, available once READY has been observed.
    pub async fn current_user(&self) -> Option<User> {
        self.current_user.read().await.clone()
    }

    /// Connect and serve until the owning task is cancelled. Each pass runs
    /// one connection to completion and then reconnects: immediately after a
    /// clean close, with exponential backoff after a transport failure.
    pub async fn run(&self) {
        let mut attempt: u64 = 0;
        let mut delay = Duration::from_secs(1);
        loop {
            attempt += 1;
            let span = tracing::info_span!("gateway", attempt);
            match self.run_connection().instrument(span).await {
                Ok(()) => {
                    delay = Duration::from_secs(1);
                }
                Err(e) => {
                    tracing::warn!("gateway connection failed: {e}, retrying in {:?}", delay);
                    tokio::time::sleep(delay).await;
                    delay = (delay * 2).min(MAX_RETRY_DELAY);
                }
            }
        }
    }

    /// One connection attempt: URL discovery through socket close. The
    /// router (and with it the heartbeat) and the socket are released
    /// together on every exit path.
    async fn run_connection(&self) -> Result<(), GatewayError> {
        let url = self.resolver.gateway_url().await?;
        tracing::debug!("gateway url: {url}");

        let (ws, _) = connect_async(url.as_str()).await?;
        let (mut ws_sink, mut ws_stream) = ws.split();

        // Outbound frames from the handshake and the heartbeat task.
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let mut router = Router::new(
            self.config.clone(),
            self.session.clone(),
            self.current_user.clone(),
            self.sink.clone(),
            tx,
        );

        loop {
            tokio::select! {
                Some(frame) = rx.recv() => {
                    if ws_sink.send(Message::Text(frame.into())).await.is_err() {
                        break;
                    }
                }
                msg = ws_stream.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            if router.handle_frame(&text).await == Flow::Close {
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) | None => break,
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            tracing::warn!("gateway socket error: {e}");
                            break;
                        }
                    }
                }
            }
        }

        // Router first (aborts the heartbeat), then the socket.
        drop(router);
        let _ = ws_sink.close().await;
        Ok(())
    }
}
