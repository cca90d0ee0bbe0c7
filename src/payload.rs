use serde::{Deserialize, Serialize};

/// Opcodes for gateway frames, per the platform's published gateway table.
pub mod opcode {
    pub const DISPATCH: u8 = 0;
    pub const HEARTBEAT: u8 = 1;
    pub const IDENTIFY: u8 = 2;
    pub const RESUME: u8 = 6;
    pub const RECONNECT: u8 = 7;
    pub const INVALID_SESSION: u8 = 9;
    pub const HELLO: u8 = 10;
    pub const HEARTBEAT_ACK: u8 = 11;
}

/// Gateway frame envelope. `s` and `t` are only present on DISPATCH frames;
/// `d` stays opaque here and is decoded downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    pub op: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
}

/// A dispatched event handed to the sink: normalized kind plus the raw frame.
#[derive(Debug, Clone)]
pub struct GatewayEvent {
    pub kind: String,
    pub payload: Payload,
}

/// Map a dispatch tag to its sink-facing kind: `MESSAGE_CREATE` → `message-create`.
pub fn event_kind(tag: &str) -> String {
    tag.to_lowercase().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dispatch_frame() {
        let payload: Payload = serde_json::from_str(
            r#"{"op":0,"d":{"content":"hi"},"s":42,"t":"MESSAGE_CREATE"}"#,
        )
        .unwrap();
        assert_eq!(payload.op, opcode::DISPATCH);
        assert_eq!(payload.s, Some(42));
        assert_eq!(payload.t.as_deref(), Some("MESSAGE_CREATE"));
        assert_eq!(payload.d.unwrap()["content"], "hi");
    }

    #[test]
    fn test_parse_hello_without_seq_or_tag() {
        let payload: Payload =
            serde_json::from_str(r#"{"op":10,"d":{"heartbeat_interval":41250}}"#).unwrap();
        assert_eq!(payload.op, opcode::HELLO);
        assert!(payload.s.is_none());
        assert!(payload.t.is_none());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let payload = Payload {
            op: opcode::HEARTBEAT_ACK,
            d: None,
            s: None,
            t: None,
        };
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"op":11}"#);
    }

    #[test]
    fn test_event_kind_normalization() {
        assert_eq!(event_kind("MESSAGE_CREATE"), "message-create");
        assert_eq!(event_kind("READY"), "ready");
        assert_eq!(event_kind("AT_MESSAGE_CREATE"), "at-message-create");
    }
}
