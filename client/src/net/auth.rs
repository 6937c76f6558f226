//! Browser implementations of the session's signer and auth API.

use async_trait::async_trait;
use session::{Address, AuthApi, SessionError};

use crate::net::api;

/// [`AuthApi`] over the worker's `/api/login` and `/api/validate-token`.
pub struct HttpAuthApi;

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, address: &Address, signature: &str) -> Result<String, SessionError> {
        api::login(address, signature).await.map_err(SessionError::LoginExchangeFailed)
    }

    async fn validate_token(&self, token: &str) -> Result<bool, SessionError> {
        api::validate_token(token).await.map_err(SessionError::TokenValidationFailed)
    }
}

#[cfg(feature = "hydrate")]
pub use signer::WalletSigner;

#[cfg(feature = "hydrate")]
mod signer {
    use std::rc::Rc;

    use async_trait::async_trait;
    use session::{Address, SessionError, Signer};

    use crate::net::api;
    use crate::net::wallet::BrowserWallet;

    /// Fetches a challenge from `/api/nonce` and has the wallet sign it.
    pub struct WalletSigner {
        pub wallet: Rc<BrowserWallet>,
    }

    #[async_trait(?Send)]
    impl Signer for WalletSigner {
        async fn sign_challenge(&self, address: &Address) -> Result<String, SessionError> {
            let challenge = api::request_nonce(address).await.map_err(SessionError::LoginExchangeFailed)?;
            self.wallet.personal_sign(&challenge.message, address).await
        }
    }
}
