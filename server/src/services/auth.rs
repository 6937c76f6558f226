//! Wallet login: challenge issue and signature exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `POST /api/nonce` calls [`issue_challenge`]; `POST /api/login` calls
//! [`login`]. Input shape is validated before any storage access so a
//! malformed request never burns the caller's pending nonce.
//!
//! ERROR HANDLING
//! ==============
//! [`LoginError`] separates caller mistakes (malformed input), failed
//! proofs (no nonce or wrong signer), and storage failures; routes map
//! these to 400, 401, and 500.

use serde::Serialize;

use crate::config::Config;
use crate::services::nonce::{challenge_message, generate_nonce};
use crate::services::signature::{self, SignatureError};
use crate::services::store::LoginStore;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Malformed(#[from] SignatureError),
    #[error("no pending nonce for address")]
    NonceMissing,
    #[error("signature does not match address")]
    SignerMismatch,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Body of a successful `POST /api/nonce`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Challenge {
    pub nonce: String,
    pub message: String,
}

/// Issue a fresh nonce for `address` and the message to sign.
///
/// # Errors
///
/// `Malformed` for a bad address, `Db` when the nonce cannot be stored.
pub async fn issue_challenge(store: &dyn LoginStore, config: &Config, address: &str) -> Result<Challenge, LoginError> {
    let address = signature::normalize_address(address)?;
    let nonce = generate_nonce();
    store.put_nonce(&address, &nonce, config.nonce_ttl_secs).await?;

    let message = challenge_message(&config.site_name, &address, &nonce, config.login_chain_id);
    tracing::debug!(%address, "login nonce issued");
    Ok(Challenge { nonce, message })
}

/// Verify `signature` over the pending challenge for `address` and create
/// a session. The nonce is consumed whether or not the proof succeeds.
///
/// # Errors
///
/// See [`LoginError`].
pub async fn login(
    store: &dyn LoginStore,
    config: &Config,
    address: &str,
    signature_hex: &str,
) -> Result<String, LoginError> {
    let address = signature::normalize_address(address)?;
    let bytes = signature::parse_signature(signature_hex)?;
    signature::recovery_id(bytes[64])?;

    let nonce = store.take_nonce(&address).await?.ok_or(LoginError::NonceMissing)?;
    let message = challenge_message(&config.site_name, &address, &nonce, config.login_chain_id);

    let signer = signature::recover_personal_signer(&message, signature_hex).map_err(|e| {
        tracing::warn!(%address, error = %e, "signer recovery failed");
        LoginError::SignerMismatch
    })?;
    if signer != address {
        tracing::warn!(%address, %signer, "login signer mismatch");
        return Err(LoginError::SignerMismatch);
    }

    let token = store.create_session(&address, config.session_ttl_hours).await?;
    tracing::info!(%address, "wallet login");
    Ok(token)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
