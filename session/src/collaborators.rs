//! Capabilities the session controller is built from.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches the DOM, the network, or the wallet
//! extension directly. The client crate supplies browser implementations;
//! tests supply in-memory fakes.
//!
//! Futures are `?Send` because the browser implementations hold `JsValue`s
//! and run on the single-threaded event loop.

use async_trait::async_trait;

use crate::address::Address;
use crate::controller::SessionSnapshot;
use crate::error::SessionError;

/// Live wallet connection state as last reported by the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletAccount {
    pub connected: bool,
    pub address: Option<Address>,
}

impl WalletAccount {
    #[must_use]
    pub fn connected(address: Address) -> Self {
        Self { connected: true, address: Some(address) }
    }

    #[must_use]
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Address only when the wallet is actually connected.
    #[must_use]
    pub fn connected_address(&self) -> Option<&Address> {
        if self.connected { self.address.as_ref() } else { None }
    }
}

/// Wallet connection provider. Change notifications are pushed into
/// [`crate::SessionController::handle_wallet_change`] by the owner.
#[async_trait(?Send)]
pub trait WalletProvider {
    fn account(&self) -> WalletAccount;
    async fn connect(&self) -> Result<(), SessionError>;
    async fn disconnect(&self) -> Result<(), SessionError>;
}

/// Produces a signature over the login challenge for `address`.
#[async_trait(?Send)]
pub trait Signer {
    async fn sign_challenge(&self, address: &Address) -> Result<String, SessionError>;
}

/// Backend session endpoints.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Exchange a challenge signature for a bearer token.
    async fn login(&self, address: &Address, signature: &str) -> Result<String, SessionError>;
    /// Ask whether `token` is still accepted.
    async fn validate_token(&self, token: &str) -> Result<bool, SessionError>;
}

/// Presentation hooks for the connect area and transient notifications.
pub trait SessionView {
    fn render(&self, snapshot: &SessionSnapshot);
    fn notify_error(&self, message: &str);
}
