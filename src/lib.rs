pub mod client;
pub mod config;
pub mod error;
pub mod handshake;
pub mod heartbeat;
pub mod intents;
pub mod payload;
pub mod resolver;
pub mod router;
pub mod session;
pub mod traits;
pub mod user;

pub use client::GatewayClient;
pub use config::{BotKind, GatewayConfig};
pub use error::GatewayError;
pub use payload::{GatewayEvent, Payload};
pub use resolver::HttpGatewayResolver;
pub use session::SessionState;
pub use traits::{EventSink, GatewayUrlResolver};
pub use user::User;
