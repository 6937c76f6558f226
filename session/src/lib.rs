//! Wallet-bound session state for the Gods front end.
//!
//! This crate owns the browser-independent half of sign-in: the controller
//! that decides which connect UI is visible and when the signature dialog
//! opens, the token store that persists the bearer credential, and the
//! typed event bus pages listen on. Browser glue (EIP-1193 wallet, HTTP,
//! `localStorage`) lives in `client` and plugs in through the traits in
//! [`collaborators`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`address`] | Wallet address newtype |
//! | [`collaborators`] | Wallet, signer, auth API and view traits |
//! | [`controller`] | Session state machine |
//! | [`dialog`] | Signature dialog lifecycle and close reasons |
//! | [`error`] | Error taxonomy |
//! | [`events`] | Typed publish/subscribe bus |
//! | [`gate`] | Shared loader for sign-in gated pages |
//! | [`token_store`] | Bearer token holder with pluggable persistence |

pub mod address;
pub mod collaborators;
pub mod controller;
pub mod dialog;
pub mod error;
pub mod events;
pub mod gate;
pub mod token_store;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use address::{Address, AddressError};
pub use collaborators::{AuthApi, SessionView, Signer, WalletAccount, WalletProvider};
pub use controller::{Collaborators, ConnectView, SessionController, SessionSnapshot, SessionState};
pub use dialog::{CloseOutcome, CloseReason, SignatureDialog};
pub use error::SessionError;
pub use events::{AuthEvent, EventBus, NavTarget, SubscriptionId, Topic};
pub use gate::{GatedLoader, PageState};
pub use token_store::{MemoryPersistence, StoredSession, TokenPersistence, TokenStore};
