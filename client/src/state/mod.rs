//! Client application state.
//!
//! ARCHITECTURE
//! ============
//! `session` and `toast` are reactive signal state provided via context;
//! `runtime` holds the non-`Send` session controller for the page.

pub mod runtime;
pub mod session;
pub mod toast;
