//! Auth gate for pages that show wallet-scoped data.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/my-gods` and `/god/:id` render nothing useful without a token. Each
//! page asks the loader for a [`PageState`] and re-runs it whenever the
//! token store announces a sign-in or sign-out.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;

use crate::address::Address;
use crate::collaborators::WalletProvider;
use crate::events::{AuthEvent, SubscriptionId, Topic};
use crate::token_store::TokenStore;

/// What a gated page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageState<T> {
    /// No token: "Sign-in required".
    AuthRequired,
    /// Token present, data on its way.
    Loading,
    Ready(T),
    /// Token present but the fetch failed.
    Failed,
}

impl<T> PageState<T> {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

pub struct GatedLoader {
    store: Rc<TokenStore>,
    wallet: Rc<dyn WalletProvider>,
}

impl GatedLoader {
    #[must_use]
    pub fn new(store: Rc<TokenStore>, wallet: Rc<dyn WalletProvider>) -> Self {
        Self { store, wallet }
    }

    /// Address the page is being viewed as: the token's bound address,
    /// falling back to the live wallet address.
    #[must_use]
    pub fn viewer_address(&self) -> Option<Address> {
        self.store
            .address()
            .or_else(|| self.wallet.account().connected_address().cloned())
    }

    /// Address to load for, present only when a token is held.
    fn gated_address(&self) -> Option<Address> {
        if self.store.has() { self.viewer_address() } else { None }
    }

    /// State before any fetch: `AuthRequired` or `Loading`.
    #[must_use]
    pub fn gate<T>(&self) -> PageState<T> {
        if self.gated_address().is_some() { PageState::Loading } else { PageState::AuthRequired }
    }

    /// Run `fetch` for the viewer when a token and an address are present;
    /// otherwise the page is `AuthRequired`.
    pub async fn load<T, E, F, Fut>(&self, fetch: F) -> PageState<T>
    where
        E: Display,
        F: FnOnce(Address) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let Some(address) = self.gated_address() else {
            return PageState::AuthRequired;
        };
        match fetch(address).await {
            Ok(data) => PageState::Ready(data),
            Err(e) => {
                log::error!("gated page load failed: {e}");
                PageState::Failed
            }
        }
    }

    /// Call `handler` on every sign-in and sign-out.
    pub fn watch(&self, handler: impl Fn(&AuthEvent) + 'static) -> [SubscriptionId; 2] {
        let handler = Rc::new(handler);
        let on_out = Rc::clone(&handler);
        let bus = self.store.bus();
        [
            bus.subscribe(Topic::SignedIn, move |e| handler(e)),
            bus.subscribe(Topic::SignedOut, move |e| on_out(e)),
        ]
    }

    pub fn unwatch(&self, ids: [SubscriptionId; 2]) {
        for id in ids {
            self.store.bus().unsubscribe(id);
        }
    }
}
