//! # client
//!
//! Leptos + WASM front end for The Gods.
//!
//! Pages, components, and browser glue for the wallet-gated NFT viewer and
//! editor. The session state machine itself lives in the `session` crate;
//! this crate supplies its browser collaborators (EIP-1193 wallet, HTTP auth
//! API, `localStorage` persistence) and renders its snapshots.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
