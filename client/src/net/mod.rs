//! Networking modules for HTTP and the injected wallet.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `auth` adapts them to the session traits, and
//! `wallet` wraps the EIP-1193 provider.

pub mod api;
pub mod auth;
pub mod wallet;
