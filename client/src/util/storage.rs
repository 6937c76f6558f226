//! Browser `localStorage` persistence for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so the token
//! store can persist its session without repeating web-sys glue. On the
//! server every call is a no-op and nothing is ever loaded.

use session::{StoredSession, TokenPersistence};

/// `localStorage` key holding the JSON-encoded session.
pub const SESSION_KEY: &str = "gods.session";

/// Read the raw string stored at `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` at `key`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// [`TokenPersistence`] backed by `localStorage`.
pub struct LocalStoragePersistence;

impl TokenPersistence for LocalStoragePersistence {
    fn load(&self) -> Option<StoredSession> {
        load_raw(SESSION_KEY).and_then(|raw| StoredSession::decode(&raw))
    }

    fn save(&self, session: &StoredSession) {
        save_raw(SESSION_KEY, &session.encode());
    }

    fn remove(&self) {
        remove(SESSION_KEY);
    }
}
