//! Typed publish/subscribe bus for cross-component signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token store announces sign-in/sign-out here, the account menu
//! announces navigation, and the attribute editor announces live edits.
//! Gated pages and the standalone viewer subscribe instead of polling.
//!
//! DESIGN
//! ======
//! Single-threaded (`Rc`/`RefCell`), matching the browser event loop.
//! `publish` snapshots the matching handlers before invoking them, so a
//! handler may subscribe, unsubscribe, or publish again without tripping a
//! `RefCell` borrow.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::address::Address;

/// Topic a subscriber listens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    SignedIn,
    SignedOut,
    Nav,
    AttributesChanged,
}

/// In-app navigation requests raised from the account menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    MyGods,
}

/// Event payloads carried on the bus.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthEvent {
    /// A token was stored for `address`.
    SignedIn { address: Address },
    /// The stored token was removed.
    SignedOut,
    /// The user picked a navigation entry.
    Nav(NavTarget),
    /// The attribute editor produced new NFT data for `id`.
    AttributesChanged { id: String, data: Value },
}

impl AuthEvent {
    #[must_use]
    pub fn topic(&self) -> Topic {
        match self {
            Self::SignedIn { .. } => Topic::SignedIn,
            Self::SignedOut => Topic::SignedOut,
            Self::Nav(_) => Topic::Nav,
            Self::AttributesChanged { .. } => Topic::AttributesChanged,
        }
    }
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Rc<dyn Fn(&AuthEvent)>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Topic, Handler)>,
}

/// Cloneable handle to a shared bus; clones publish to the same subscribers.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<BusInner>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every event on `topic`.
    pub fn subscribe(&self, topic: Topic, handler: impl Fn(&AuthEvent) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.handlers.push((id, topic, Rc::new(handler)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.handlers.len();
        inner.handlers.retain(|(sub, _, _)| *sub != id);
        inner.handlers.len() != before
    }

    /// Deliver `event` to the subscribers of its topic, returning how many ran.
    pub fn publish(&self, event: &AuthEvent) -> usize {
        let topic = event.topic();
        let targets: Vec<Handler> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .filter(|(_, t, _)| *t == topic)
            .map(|(_, _, h)| Rc::clone(h))
            .collect();
        for handler in &targets {
            handler(event);
        }
        targets.len()
    }

    #[must_use]
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.inner
            .borrow()
            .handlers
            .iter()
            .filter(|(_, t, _)| *t == topic)
            .count()
    }
}
