use async_trait::async_trait;

use crate::error::GatewayError;
use crate::payload::GatewayEvent;

/// Resolves the negotiated WebSocket URL for the gateway. The URL is
/// fetched, not static, and may change between reconnects.
#[async_trait]
pub trait GatewayUrlResolver: Send + Sync {
    async fn gateway_url(&self) -> Result<String, GatewayError>;
}

/// Downstream consumer of gateway events. Both calls are fire-and-forget;
/// the client never inspects a result.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// A dispatched event, ready for domain translation.
    async fn dispatch(&self, event: GatewayEvent);

    /// The connection is fully authenticated and serving.
    async fn online(&self);
}
