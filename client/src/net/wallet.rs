//! EIP-1193 browser wallet (`window.ethereum`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the session crate's [`WalletProvider`] over the injected
//! provider object. The last known account is cached so the controller can
//! read it synchronously; `accountsChanged` notifications refresh the cache
//! and are forwarded to the controller by the runtime.
//!
//! TRADE-OFFS
//! ==========
//! Providers differ on disconnect. `wallet_revokePermissions` is attempted
//! and its failure ignored; the cached account is cleared either way, which
//! is what the session state machine observes.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use session::{Address, WalletAccount};

/// Account state from an `eth_accounts`/`accountsChanged` list: the first
/// parseable address, or disconnected when there is none.
pub fn account_from_list(accounts: &[String]) -> WalletAccount {
    accounts
        .iter()
        .find_map(|a| Address::parse(a).ok())
        .map_or_else(WalletAccount::disconnected, WalletAccount::connected)
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserWallet;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use js_sys::{Array, Function, Object, Promise, Reflect};
    use session::{Address, SessionError, WalletAccount, WalletProvider};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    use super::account_from_list;

    const NO_WALLET: &str = "No wallet found. Install a browser wallet to continue.";

    fn ethereum() -> Option<JsValue> {
        let window = web_sys::window()?;
        let eth = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        (!eth.is_undefined() && !eth.is_null()).then_some(eth)
    }

    fn js_message(value: &JsValue) -> String {
        Reflect::get(value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| "wallet request failed".to_owned())
    }

    fn strings(value: &JsValue) -> Vec<String> {
        if !Array::is_array(value) {
            return Vec::new();
        }
        Array::from(value).iter().filter_map(|v| v.as_string()).collect()
    }

    async fn request(method: &str, params: &Array) -> Result<JsValue, String> {
        let eth = ethereum().ok_or_else(|| NO_WALLET.to_owned())?;
        let request: Function = Reflect::get(&eth, &JsValue::from_str("request"))
            .map_err(|e| js_message(&e))?
            .dyn_into()
            .map_err(|_| "wallet has no request method".to_owned())?;

        let args = Object::new();
        Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method)).map_err(|e| js_message(&e))?;
        Reflect::set(&args, &JsValue::from_str("params"), params).map_err(|e| js_message(&e))?;

        let promise: Promise = request
            .call1(&eth, &args)
            .map_err(|e| js_message(&e))?
            .dyn_into()
            .map_err(|_| "wallet request did not return a promise".to_owned())?;
        JsFuture::from(promise).await.map_err(|e| js_message(&e))
    }

    /// Injected wallet with a cached account.
    #[derive(Default)]
    pub struct BrowserWallet {
        account: RefCell<WalletAccount>,
    }

    impl BrowserWallet {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn available() -> bool {
            ethereum().is_some()
        }

        /// Read already-authorized accounts without prompting.
        pub async fn refresh(&self) {
            match request("eth_accounts", &Array::new()).await {
                Ok(accounts) => self.set_accounts(&strings(&accounts)),
                Err(e) => log::debug!("eth_accounts unavailable: {e}"),
            }
        }

        fn set_accounts(&self, accounts: &[String]) {
            *self.account.borrow_mut() = account_from_list(accounts);
        }

        /// Subscribe to `accountsChanged`. The callback receives the new state.
        pub fn on_accounts_changed(self: &Rc<Self>, callback: impl Fn(WalletAccount) + 'static) {
            let Some(eth) = ethereum() else {
                return;
            };
            let Ok(on) = Reflect::get(&eth, &JsValue::from_str("on")).and_then(JsCast::dyn_into::<Function>) else {
                log::warn!("wallet does not support event subscriptions");
                return;
            };
            let wallet = Rc::clone(self);
            let closure = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
                wallet.set_accounts(&strings(&accounts));
                callback(wallet.account());
            });
            if let Err(e) = on.call2(&eth, &JsValue::from_str("accountsChanged"), closure.as_ref().unchecked_ref()) {
                log::warn!("accountsChanged subscription failed: {}", js_message(&e));
            }
            closure.forget();
        }

        /// `personal_sign` over `message` with `address`.
        pub async fn personal_sign(&self, message: &str, address: &Address) -> Result<String, SessionError> {
            let params = Array::of2(&JsValue::from_str(message), &JsValue::from_str(address.as_str()));
            let signature = request("personal_sign", &params).await.map_err(SessionError::SignatureRejected)?;
            signature
                .as_string()
                .ok_or_else(|| SessionError::SignatureRejected("wallet returned no signature".to_owned()))
        }
    }

    #[async_trait(?Send)]
    impl WalletProvider for BrowserWallet {
        fn account(&self) -> WalletAccount {
            self.account.borrow().clone()
        }

        async fn connect(&self) -> Result<(), SessionError> {
            let accounts = request("eth_requestAccounts", &Array::new()).await.map_err(SessionError::Wallet)?;
            self.set_accounts(&strings(&accounts));
            Ok(())
        }

        async fn disconnect(&self) -> Result<(), SessionError> {
            let permissions = Object::new();
            let _ = Reflect::set(&permissions, &JsValue::from_str("eth_accounts"), &Object::new());
            if let Err(e) = request("wallet_revokePermissions", &Array::of1(&permissions)).await {
                log::debug!("wallet_revokePermissions unsupported: {e}");
            }
            *self.account.borrow_mut() = WalletAccount::disconnected();
            Ok(())
        }
    }
}
