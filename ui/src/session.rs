use dioxus::prelude::*;
use shared::session::StoredSession;

/// Local storage key under which the session record is persisted.
pub const SESSION_KEY: &str = "soundframe_session";

/// Reactive handle on the current session. The signal holds the most recent
/// successful token exchange, or `None` when logged out.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    state: Signal<Option<StoredSession>>,
}

impl Session {
    pub fn new(state: Signal<Option<StoredSession>>) -> Self {
        Self { state }
    }

    pub fn login(&mut self, record: StoredSession) {
        self.state.set(Some(record));
    }

    pub fn logout(&mut self) {
        self.state.set(None);
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.read().as_ref().map(|s| s.user_id.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().is_some()
    }
}

pub fn use_session() -> Session {
    use_context::<Session>()
}
