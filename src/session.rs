/// Resumable session identity. An empty `session_id` means there is nothing
/// to resume and the next connection must identify from scratch.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub session_id: String,
    pub last_seq: Option<u64>,
}

impl SessionState {
    /// Forget the session entirely. Invoked on INVALID_SESSION so the next
    /// connection identifies instead of resuming.
    pub fn reset(&mut self) {
        self.session_id.clear();
        self.last_seq = None;
    }

    /// Record what the server just told us: a session id from READY and/or
    /// the sequence number of the latest dispatch.
    pub fn advance(&mut self, session_id: Option<&str>, seq: Option<u64>) {
        if let Some(id) = session_id {
            self.session_id = id.to_string();
        }
        if let Some(s) = seq {
            self.last_seq = Some(s);
        }
    }

    pub fn resumable(&self) -> bool {
        !self.session_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_not_resumable() {
        let state = SessionState::default();
        assert!(!state.resumable());
        assert!(state.last_seq.is_none());
    }

    #[test]
    fn test_advance_tracks_latest_seq() {
        let mut state = SessionState::default();
        state.advance(Some("abc"), Some(1));
        state.advance(None, Some(2));
        state.advance(None, Some(7));
        assert_eq!(state.session_id, "abc");
        assert_eq!(state.last_seq, Some(7));
        assert!(state.resumable());
    }

    #[test]
    fn test_advance_without_seq_keeps_cursor() {
        let mut state = SessionState::default();
        state.advance(None, Some(3));
        state.advance(Some("abc"), None);
        assert_eq!(state.last_seq, Some(3));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = SessionState::default();
        state.advance(Some("abc"), Some(9));
        state.reset();
        assert!(!state.resumable());
        assert_eq!(state.session_id, "");
        assert!(state.last_seq.is_none());
    }
}
