//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own login logic and persistence concerns so route
//! handlers can stay focused on protocol translation.

pub mod auth;
pub mod nonce;
pub mod session;
pub mod signature;
pub mod store;
