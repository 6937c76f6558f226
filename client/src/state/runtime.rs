//! Per-page session runtime.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the single [`SessionController`], its token store and event bus for
//! the lifetime of the page. These are `Rc`-based and cannot live in Leptos
//! context (which requires `Send + Sync`), so they sit in a thread-local and
//! components reach them through [`current`] and [`spawn_action`].
//!
//! DESIGN
//! ======
//! [`start`] wires the browser collaborators, mirrors bus events into
//! [`SessionUi`], forwards `accountsChanged` to the controller, then reads
//! the wallet's current account and bootstraps the stored token. It is
//! idempotent.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use session::{EventBus, GatedLoader, SessionController, TokenStore, WalletProvider};

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::{session::SessionUi, toast::ToastState};

/// Everything one page shares for sign-in.
pub struct SessionRuntime {
    pub controller: Rc<SessionController>,
    pub store: Rc<TokenStore>,
    pub bus: EventBus,
    pub wallet: Rc<dyn WalletProvider>,
}

impl SessionRuntime {
    /// Loader for a sign-in gated page.
    pub fn gated_loader(&self) -> GatedLoader {
        GatedLoader::new(Rc::clone(&self.store), Rc::clone(&self.wallet))
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<Rc<SessionRuntime>>> = const { RefCell::new(None) };
}

/// Install `runtime` unless one is already running; returns the active one.
pub fn install(runtime: SessionRuntime) -> Rc<SessionRuntime> {
    RUNTIME.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(existing) = slot.as_ref() {
            return Rc::clone(existing);
        }
        let runtime = Rc::new(runtime);
        *slot = Some(Rc::clone(&runtime));
        runtime
    })
}

/// The active runtime, if [`start`] has run.
pub fn current() -> Option<Rc<SessionRuntime>> {
    RUNTIME.with(|slot| slot.borrow().clone())
}

/// Run an async controller action on the local executor.
pub fn spawn_action<F, Fut>(action: F)
where
    F: FnOnce(Rc<SessionController>) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let Some(runtime) = current() else {
            log::warn!("session action before runtime start");
            return;
        };
        leptos::task::spawn_local(action(Rc::clone(&runtime.controller)));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = action;
    }
}

/// Build and start the browser session runtime.
#[cfg(feature = "hydrate")]
pub fn start(ui: SessionUi, toasts: RwSignal<ToastState>) {
    use session::{Collaborators, Topic};

    use crate::net::auth::{HttpAuthApi, WalletSigner};
    use crate::net::wallet::BrowserWallet;
    use crate::state::session::SignalView;
    use crate::util::storage::LocalStoragePersistence;

    if current().is_some() {
        return;
    }
    if !BrowserWallet::available() {
        log::info!("no injected wallet; connect will report an error");
    }

    let bus = EventBus::new();
    let store = Rc::new(TokenStore::new(Box::new(LocalStoragePersistence), bus.clone()));
    let wallet = BrowserWallet::new();
    let controller = Rc::new(SessionController::new(
        Rc::clone(&store),
        Collaborators {
            wallet: wallet.clone(),
            signer: Rc::new(WalletSigner { wallet: Rc::clone(&wallet) }),
            api: Rc::new(HttpAuthApi),
            view: Rc::new(SignalView { ui, toasts }),
        },
    ));

    ui.signed_in_as.set(store.address());
    let signed_in_store = Rc::clone(&store);
    bus.subscribe(Topic::SignedIn, move |_| ui.auth_changed(signed_in_store.address()));
    bus.subscribe(Topic::SignedOut, move |_| ui.auth_changed(None));

    let on_change = Rc::clone(&controller);
    wallet.on_accounts_changed(move |account| on_change.handle_wallet_change(account));

    let runtime = install(SessionRuntime {
        controller: Rc::clone(&controller),
        store,
        bus,
        wallet: wallet.clone(),
    });
    log::debug!("session runtime started (token present: {})", runtime.store.has());

    leptos::task::spawn_local(async move {
        wallet.refresh().await;
        controller.handle_wallet_change(wallet.account());
        controller.bootstrap().await;
    });
}
