#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use gatelink::{
    BotKind, EventSink, GatewayConfig, GatewayError, GatewayEvent, GatewayUrlResolver,
};

/// Opt into client logs with e.g. `RUST_LOG=gatelink=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatelink=warn".into()),
        )
        .try_init();
}

pub fn test_config() -> GatewayConfig {
    GatewayConfig::new("100", "tok", BotKind::Private, "http://unused.invalid")
}

/// Resolver pinned to the in-process test gateway.
pub struct StaticResolver {
    pub url: String,
}

#[async_trait]
impl GatewayUrlResolver for StaticResolver {
    async fn gateway_url(&self) -> Result<String, GatewayError> {
        Ok(self.url.clone())
    }
}

/// Sink that records everything the client forwards.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Mutex<Vec<GatewayEvent>>,
    pub online: AtomicUsize,
}

impl RecordingSink {
    pub async fn kinds(&self) -> Vec<String> {
        self.events.lock().await.iter().map(|e| e.kind.clone()).collect()
    }

    pub fn online_count(&self) -> usize {
        self.online.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn dispatch(&self, event: GatewayEvent) {
        self.events.lock().await.push(event);
    }

    async fn online(&self) {
        self.online.fetch_add(1, Ordering::SeqCst);
    }
}
