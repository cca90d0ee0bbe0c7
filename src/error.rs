use std::fmt;

use tokio_tungstenite::tungstenite;

#[derive(Debug)]
pub enum GatewayError {
    Http(reqwest::Error),
    Server { status: u16, body: String },
    Socket(tungstenite::Error),
    UnexpectedResponse(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Http(e) => write!(f, "HTTP error: {e}"),
            GatewayError::Server { status, body } => {
                write!(f, "server returned {status}: {body}")
            }
            GatewayError::Socket(e) => write!(f, "socket error: {e}"),
            GatewayError::UnexpectedResponse(msg) => {
                write!(f, "unexpected response: {msg}")
            }
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::Http(e)
    }
}

impl From<tungstenite::Error> for GatewayError {
    fn from(e: tungstenite::Error) -> Self {
        GatewayError::Socket(e)
    }
}
