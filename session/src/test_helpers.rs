use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;

use crate::address::Address;
use crate::collaborators::{AuthApi, SessionView, Signer, WalletAccount, WalletProvider};
use crate::controller::{Collaborators, SessionController, SessionSnapshot};
use crate::error::SessionError;
use crate::events::EventBus;
use crate::token_store::TokenStore;

pub(crate) const ADDR_A: &str = "0xABC0000000000000000000000000000000000001";
pub(crate) const ADDR_B: &str = "0xdef0000000000000000000000000000000000002";

pub(crate) fn addr(raw: &str) -> Address {
    Address::parse(raw).expect("test address")
}

// =============================================================================
// WALLET
// =============================================================================

#[derive(Default)]
pub(crate) struct FakeWallet {
    pub account: RefCell<WalletAccount>,
    pub connect_to: RefCell<Option<Address>>,
    pub connect_calls: Cell<u32>,
    pub disconnect_calls: Cell<u32>,
    pub fail_disconnect: Cell<bool>,
}

impl FakeWallet {
    pub fn connected(address: Address) -> Self {
        let wallet = Self::default();
        *wallet.account.borrow_mut() = WalletAccount::connected(address);
        wallet
    }

    pub fn set_account(&self, account: WalletAccount) {
        *self.account.borrow_mut() = account;
    }
}

#[async_trait(?Send)]
impl WalletProvider for FakeWallet {
    fn account(&self) -> WalletAccount {
        self.account.borrow().clone()
    }

    async fn connect(&self) -> Result<(), SessionError> {
        self.connect_calls.set(self.connect_calls.get() + 1);
        match self.connect_to.borrow().clone() {
            Some(address) => {
                self.set_account(WalletAccount::connected(address));
                Ok(())
            }
            None => Err(SessionError::Wallet("User rejected the request.".to_owned())),
        }
    }

    async fn disconnect(&self) -> Result<(), SessionError> {
        self.disconnect_calls.set(self.disconnect_calls.get() + 1);
        if self.fail_disconnect.get() {
            return Err(SessionError::Wallet("disconnect failed".to_owned()));
        }
        self.set_account(WalletAccount::disconnected());
        Ok(())
    }
}

// =============================================================================
// SIGNER / API
// =============================================================================

pub(crate) struct FakeSigner {
    pub result: RefCell<Result<String, SessionError>>,
    pub calls: Cell<u32>,
    /// Applied to the wallet while "the user is looking at the prompt".
    pub switch_wallet_to: RefCell<Option<(Rc<FakeWallet>, WalletAccount)>>,
}

impl Default for FakeSigner {
    fn default() -> Self {
        Self {
            result: RefCell::new(Ok("0xsig".to_owned())),
            calls: Cell::new(0),
            switch_wallet_to: RefCell::new(None),
        }
    }
}

#[async_trait(?Send)]
impl Signer for FakeSigner {
    async fn sign_challenge(&self, _address: &Address) -> Result<String, SessionError> {
        self.calls.set(self.calls.get() + 1);
        if let Some((wallet, account)) = self.switch_wallet_to.borrow_mut().take() {
            wallet.set_account(account);
        }
        self.result.borrow().clone()
    }
}

pub(crate) struct FakeApi {
    pub login_result: RefCell<Result<String, SessionError>>,
    pub validate_result: RefCell<Result<bool, SessionError>>,
    pub login_calls: Cell<u32>,
    pub validate_calls: Cell<u32>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            login_result: RefCell::new(Ok("tok_123".to_owned())),
            validate_result: RefCell::new(Ok(true)),
            login_calls: Cell::new(0),
            validate_calls: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn login(&self, _address: &Address, _signature: &str) -> Result<String, SessionError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login_result.borrow().clone()
    }

    async fn validate_token(&self, _token: &str) -> Result<bool, SessionError> {
        self.validate_calls.set(self.validate_calls.get() + 1);
        self.validate_result.borrow().clone()
    }
}

// =============================================================================
// VIEW
// =============================================================================

#[derive(Default)]
pub(crate) struct RecordingView {
    pub snapshots: RefCell<Vec<SessionSnapshot>>,
    pub errors: RefCell<Vec<String>>,
}

impl RecordingView {
    pub fn last(&self) -> SessionSnapshot {
        self.snapshots.borrow().last().cloned().unwrap_or_default()
    }
}

impl SessionView for RecordingView {
    fn render(&self, snapshot: &SessionSnapshot) {
        self.snapshots.borrow_mut().push(snapshot.clone());
    }

    fn notify_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }
}

// =============================================================================
// HARNESS
// =============================================================================

pub(crate) struct Harness {
    pub bus: EventBus,
    pub store: Rc<TokenStore>,
    pub wallet: Rc<FakeWallet>,
    pub signer: Rc<FakeSigner>,
    pub api: Rc<FakeApi>,
    pub view: Rc<RecordingView>,
    pub controller: SessionController,
}

impl Harness {
    pub fn new(wallet: FakeWallet) -> Self {
        Self::with_store(wallet, |bus| TokenStore::in_memory(bus))
    }

    pub fn with_store(wallet: FakeWallet, make_store: impl FnOnce(EventBus) -> TokenStore) -> Self {
        let bus = EventBus::new();
        let store = Rc::new(make_store(bus.clone()));
        let wallet = Rc::new(wallet);
        let signer = Rc::new(FakeSigner::default());
        let api = Rc::new(FakeApi::default());
        let view = Rc::new(RecordingView::default());
        let controller = SessionController::new(
            Rc::clone(&store),
            Collaborators {
                wallet: wallet.clone(),
                signer: signer.clone(),
                api: api.clone(),
                view: view.clone(),
            },
        );
        Self { bus, store, wallet, signer, api, view, controller }
    }
}
