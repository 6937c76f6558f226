//! Session/auth state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller per page. It is built at mount, fed wallet change
//! notifications and button presses by the client, and pushes a
//! [`SessionSnapshot`] into the [`SessionView`] after every transition. The
//! connect area renders exactly one of Connect / Sign prompt / Account from
//! that snapshot.
//!
//! DESIGN
//! ======
//! State lives in a `RefCell<SessionState>`. Borrows are always dropped
//! before awaiting a collaborator or touching the token store, because the
//! store publishes on the event bus and bus handlers may read the
//! controller back.
//!
//! A wallet disconnect (connected -> disconnected transition) clears the
//! stored token, as does connecting a different address than the one the
//! token was issued for.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::address::Address;
use crate::collaborators::{AuthApi, SessionView, Signer, WalletAccount, WalletProvider};
use crate::dialog::{CloseReason, SignatureDialog};
use crate::error::SessionError;
use crate::events::{AuthEvent, NavTarget};
use crate::token_store::TokenStore;

/// Route the account menu's "My Gods" entry navigates to.
pub const MY_GODS_PATH: &str = "/my-gods";

/// Which connect UI is visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConnectView {
    /// No wallet connected: a single Connect button.
    #[default]
    Connect,
    /// Wallet connected but no token: Sign & Continue plus Disconnect.
    SignPrompt { address: Option<Address> },
    /// Token present: account dropdown with My Gods and Logout.
    Account { address: Option<Address> },
}

/// Everything the view needs to draw the connect area and dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub view: ConnectView,
    pub dialog_open: bool,
    pub dialog_busy: bool,
    pub initialized: bool,
    pub require_signature: bool,
}

/// Mutable per-page session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub require_signature: bool,
    pub auth_initialized: bool,
    pub last_known_address: Option<Address>,
    pub wallet: WalletAccount,
    pub dialog: SignatureDialog,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            require_signature: true,
            auth_initialized: false,
            last_known_address: None,
            wallet: WalletAccount::disconnected(),
            dialog: SignatureDialog::default(),
        }
    }
}

/// Injected capabilities.
pub struct Collaborators {
    pub wallet: Rc<dyn WalletProvider>,
    pub signer: Rc<dyn Signer>,
    pub api: Rc<dyn AuthApi>,
    pub view: Rc<dyn SessionView>,
}

pub struct SessionController {
    store: Rc<TokenStore>,
    wallet: Rc<dyn WalletProvider>,
    signer: Rc<dyn Signer>,
    api: Rc<dyn AuthApi>,
    view: Rc<dyn SessionView>,
    state: RefCell<SessionState>,
}

impl SessionController {
    #[must_use]
    pub fn new(store: Rc<TokenStore>, collaborators: Collaborators) -> Self {
        let Collaborators { wallet, signer, api, view } = collaborators;
        let account = wallet.account();
        let state = SessionState {
            last_known_address: account.address.clone(),
            wallet: account,
            ..SessionState::default()
        };
        Self { store, wallet, signer, api, view, state: RefCell::new(state) }
    }

    #[must_use]
    pub fn store(&self) -> &Rc<TokenStore> {
        &self.store
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let st = self.state.borrow();
        SessionSnapshot {
            view: self.connect_view(&st),
            dialog_open: st.dialog.is_open(),
            dialog_busy: st.dialog.is_busy(),
            initialized: st.auth_initialized,
            require_signature: st.require_signature,
        }
    }

    /// Push the current snapshot to the view.
    pub fn render(&self) {
        let snapshot = self.snapshot();
        self.view.render(&snapshot);
    }

    // =========================================================================
    // BOOTSTRAP
    // =========================================================================

    /// Validate any stored token once at page load.
    ///
    /// Rejection and transport failure are treated the same: the token is
    /// cleared and a signature is required. Never retried.
    pub async fn bootstrap(&self) {
        let valid = match self.store.token() {
            None => false,
            Some(token) => match self.api.validate_token(&token).await {
                Ok(valid) => valid,
                Err(e) => {
                    log::warn!("stored token validation failed: {e}");
                    false
                }
            },
        };

        if valid && self.store.has() {
            let bound = self.store.address();
            let mut st = self.state.borrow_mut();
            st.require_signature = false;
            if bound.is_some() {
                st.last_known_address = bound;
            }
        } else {
            self.store.clear();
            self.state.borrow_mut().require_signature = true;
        }
        self.drop_foreign_token();

        self.state.borrow_mut().auth_initialized = true;
        self.open_dialog_if_needed();
        self.render();
    }

    // =========================================================================
    // WALLET EVENTS
    // =========================================================================

    /// Apply a change notification from the wallet provider.
    pub fn handle_wallet_change(&self, account: WalletAccount) {
        let was_connected = {
            let mut st = self.state.borrow_mut();
            let was_connected = st.wallet.connected;
            if let Some(address) = &account.address {
                st.last_known_address = Some(address.clone());
            }
            st.wallet = account.clone();
            was_connected
        };

        if account.connected {
            self.drop_foreign_token();
            self.open_dialog_if_needed();
        } else {
            // Wallet is already gone, so the dismiss outcome needs no action.
            let _ = self.state.borrow_mut().dialog.close(CloseReason::UserDismissed);
            if was_connected {
                self.store.clear();
                let mut st = self.state.borrow_mut();
                st.require_signature = true;
                st.last_known_address = None;
            }
        }

        self.render();
    }

    /// Clear a token bound to a different address than the connected wallet.
    fn drop_foreign_token(&self) {
        let connected = self.state.borrow().wallet.connected_address().cloned();
        let (Some(connected), Some(bound)) = (connected, self.store.address()) else {
            return;
        };
        if connected == bound {
            return;
        }
        log::info!("wallet {connected} does not hold the session for {bound}; dropping session");
        self.store.clear();
        let mut st = self.state.borrow_mut();
        st.require_signature = true;
        st.last_known_address = Some(connected);
    }

    fn open_dialog_if_needed(&self) -> bool {
        let has_token = self.store.has();
        let mut st = self.state.borrow_mut();
        let eligible = st.wallet.connected_address().is_some()
            && st.auth_initialized
            && st.require_signature
            && !has_token;
        eligible && st.dialog.open()
    }

    // =========================================================================
    // SIGN-IN
    // =========================================================================

    /// Sign the challenge with the connected wallet and exchange it for a token.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoWalletConnected`] when no wallet is connected (or it
    /// went away while the request was in flight); otherwise the signer's or
    /// auth API's error.
    pub async fn sign_and_login(&self) -> Result<Address, SessionError> {
        let address = self
            .wallet
            .account()
            .connected_address()
            .cloned()
            .ok_or(SessionError::NoWalletConnected)?;

        let signature = self.signer.sign_challenge(&address).await?;
        let token = self.api.login(&address, &signature).await?;

        if self.wallet.account().connected_address() != Some(&address) {
            log::warn!("wallet changed during sign-in for {address}; discarding token");
            return Err(SessionError::NoWalletConnected);
        }

        self.store.set(token, address.clone());
        {
            let mut st = self.state.borrow_mut();
            st.require_signature = false;
            st.last_known_address = Some(address.clone());
            let _ = st.dialog.close(CloseReason::SignedIn);
        }
        self.render();
        Ok(address)
    }

    /// Sign & Continue inside the signature dialog.
    ///
    /// A failure is reported and then handled exactly like Cancel.
    pub async fn confirm_signature(&self) {
        if !self.state.borrow_mut().dialog.begin_signing() {
            return;
        }
        self.render();

        let result = self.sign_and_login().await;
        self.state.borrow_mut().dialog.end_signing();

        match result {
            Ok(address) => log::info!("signed in as {address}"),
            Err(e) => {
                log::error!("sign-in from dialog failed: {e}");
                self.view.notify_error(&e.to_string());
                self.close_dialog(CloseReason::UserDismissed).await;
            }
        }
        self.render();
    }

    /// Sign & Continue from the header prompt. Failures are only reported.
    pub async fn sign_from_prompt(&self) {
        if let Err(e) = self.sign_and_login().await {
            log::error!("sign-in from prompt failed: {e}");
            self.view.notify_error(&e.to_string());
            self.render();
        }
    }

    // =========================================================================
    // DIALOG / DISCONNECT / LOGOUT
    // =========================================================================

    /// Close the dialog for `reason`, disconnecting when the user dismissed it.
    pub async fn close_dialog(&self, reason: CloseReason) {
        let outcome = self.state.borrow_mut().dialog.close(reason);
        if outcome.is_some_and(|o| o.disconnect_wallet) {
            self.disconnect_wallet().await;
        }
        self.render();
    }

    /// Cancel button, escape key, or backdrop click.
    pub async fn dismiss_dialog(&self) {
        self.close_dialog(CloseReason::UserDismissed).await;
    }

    /// Ask the wallet provider to connect.
    pub async fn connect(&self) {
        if let Err(e) = self.wallet.connect().await {
            log::error!("wallet connect failed: {e}");
            self.view.notify_error(&e.to_string());
        }
        self.handle_wallet_change(self.wallet.account());
    }

    /// Header Disconnect button shown next to the sign prompt.
    pub async fn disconnect(&self) {
        self.store.clear();
        self.disconnect_wallet().await;
    }

    /// Account menu Logout.
    pub async fn logout(&self) {
        self.store.clear();
        self.disconnect_wallet().await;
        {
            let mut st = self.state.borrow_mut();
            st.require_signature = true;
            st.last_known_address = None;
        }
        self.render();
    }

    /// Account menu "My Gods": announce the navigation and return the target.
    #[must_use]
    pub fn open_my_gods(&self) -> &'static str {
        self.store.bus().publish(&AuthEvent::Nav(NavTarget::MyGods));
        MY_GODS_PATH
    }

    async fn disconnect_wallet(&self) {
        match self.wallet.disconnect().await {
            // Providers also emit a change event; applying it twice is harmless.
            Ok(()) => self.handle_wallet_change(self.wallet.account()),
            Err(e) => {
                log::error!("wallet disconnect failed: {e}");
                self.view.notify_error(&e.to_string());
            }
        }
    }

    fn connect_view(&self, st: &SessionState) -> ConnectView {
        if self.store.has() {
            let address = st
                .wallet
                .connected_address()
                .cloned()
                .or_else(|| self.store.address())
                .or_else(|| st.last_known_address.clone());
            ConnectView::Account { address }
        } else if st.wallet.connected {
            ConnectView::SignPrompt { address: st.wallet.address.clone() }
        } else {
            ConnectView::Connect
        }
    }
}
