use crate::config::GatewayConfig;
use crate::intents;
use crate::payload::opcode;
use crate::session::SessionState;

/// Build the frame answering HELLO: RESUME when a session id survived the
/// last disconnect, IDENTIFY otherwise.
pub fn hello_reply(config: &GatewayConfig, session: &SessionState) -> String {
    if session.resumable() {
        resume(config, session)
    } else {
        identify(config)
    }
}

/// IDENTIFY: establish a brand-new session with credentials and intents.
pub fn identify(config: &GatewayConfig) -> String {
    serde_json::json!({
        "op": opcode::IDENTIFY,
        "d": {
            "token": config.authorization(),
            "intents": intents::for_kind(config.kind),
        }
    })
    .to_string()
}

/// RESUME: re-attach to an interrupted session at the saved cursor.
pub fn resume(config: &GatewayConfig, session: &SessionState) -> String {
    serde_json::json!({
        "op": opcode::RESUME,
        "d": {
            "token": config.authorization(),
            "session_id": session.session_id,
            "seq": session.last_seq,
        }
    })
    .to_string()
}
