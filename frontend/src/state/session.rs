//! Client-side record of which user, if any, is authenticated. Backed by
//! localStorage in the browser and by a thread-local map on the host so the
//! auth flow stays testable without a DOM.

pub const SESSION_KEY: &str = "citasbot_auth_user_id";

#[derive(Clone, Default)]
pub struct SessionStore {
    key: &'static str,
}

impl SessionStore {
    pub fn new() -> Self {
        Self { key: SESSION_KEY }
    }

    /// The previously persisted identifier, if any. Older builds of the panel
    /// stringified null/undefined into storage; treat those as absent.
    pub fn restore(&self) -> Option<String> {
        let raw = backend::read(self.key)?;
        if raw.is_empty() || raw == "null" || raw == "undefined" {
            return None;
        }
        Some(raw)
    }

    pub fn persist(&self, user_id: &str) {
        backend::write(self.key, user_id);
    }

    pub fn clear(&self) {
        backend::remove(self.key);
    }
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use crate::utils::storage;

    pub fn read(key: &str) -> Option<String> {
        storage::read_key(key)
    }

    pub fn write(key: &str, value: &str) {
        storage::write_key(key, value);
    }

    pub fn remove(key: &str) {
        storage::remove_key(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn restore_round_trips_persisted_identifier() {
        let session = SessionStore::new();
        session.clear();
        assert_eq!(session.restore(), None);

        session.persist("user-1");
        assert_eq!(session.restore(), Some("user-1".to_string()));
        // Restoring again yields the same identifier.
        assert_eq!(session.restore(), Some("user-1".to_string()));

        session.clear();
        assert_eq!(session.restore(), None);
    }

    #[test]
    fn stringified_null_counts_as_no_session() {
        let session = SessionStore::new();
        session.persist("null");
        assert_eq!(session.restore(), None);
        session.persist("undefined");
        assert_eq!(session.restore(), None);
        session.persist("");
        assert_eq!(session.restore(), None);
        session.clear();
    }
}
