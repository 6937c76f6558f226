//! Bearer token holder.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token store is the single source of truth for "is there a local
//! credential". The controller writes it on login/logout; pages and API
//! helpers only read it. Sign-in and sign-out are announced on the shared
//! [`EventBus`].
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best effort. A corrupt or unreadable saved session loads
//! as "no token", which simply sends the user through the signature flow
//! again.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::events::{AuthEvent, EventBus};

/// Token plus the wallet address it was issued for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub address: Address,
}

impl StoredSession {
    /// Decode the persisted JSON form. Anything malformed yields `None`.
    #[must_use]
    pub fn decode(raw: &str) -> Option<Self> {
        let session: Self = serde_json::from_str(raw).ok()?;
        (!session.token.is_empty()).then_some(session)
    }

    /// Encode into the persisted JSON form.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Storage backend that keeps the session across reloads.
pub trait TokenPersistence {
    fn load(&self) -> Option<StoredSession>;
    fn save(&self, session: &StoredSession);
    fn remove(&self);
}

/// Process-local persistence used by tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    slot: RefCell<Option<StoredSession>>,
}

impl MemoryPersistence {
    #[must_use]
    pub fn with_session(session: StoredSession) -> Self {
        Self { slot: RefCell::new(Some(session)) }
    }
}

impl TokenPersistence for MemoryPersistence {
    fn load(&self) -> Option<StoredSession> {
        self.slot.borrow().clone()
    }

    fn save(&self, session: &StoredSession) {
        *self.slot.borrow_mut() = Some(session.clone());
    }

    fn remove(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Current bearer token and its bound address.
pub struct TokenStore {
    current: RefCell<Option<StoredSession>>,
    persistence: Box<dyn TokenPersistence>,
    bus: EventBus,
}

impl TokenStore {
    /// Create a store, loading any session the backend already holds.
    #[must_use]
    pub fn new(persistence: Box<dyn TokenPersistence>, bus: EventBus) -> Self {
        let current = persistence.load();
        Self { current: RefCell::new(current), persistence, bus }
    }

    #[must_use]
    pub fn in_memory(bus: EventBus) -> Self {
        Self::new(Box::new(MemoryPersistence::default()), bus)
    }

    #[must_use]
    pub fn has(&self) -> bool {
        self.current.borrow().is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.token.clone())
    }

    #[must_use]
    pub fn address(&self) -> Option<Address> {
        self.current.borrow().as_ref().map(|s| s.address.clone())
    }

    #[must_use]
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Store `token` for `address`, persist it, and announce `SignedIn`.
    pub fn set(&self, token: impl Into<String>, address: Address) {
        let session = StoredSession { token: token.into(), address: address.clone() };
        self.persistence.save(&session);
        *self.current.borrow_mut() = Some(session);
        self.bus.publish(&AuthEvent::SignedIn { address });
    }

    /// Drop the token. Announces `SignedOut` only if one was present.
    pub fn clear(&self) {
        let had_token = self.current.borrow_mut().take().is_some();
        self.persistence.remove();
        if had_token {
            self.bus.publish(&AuthEvent::SignedOut);
        }
    }
}
