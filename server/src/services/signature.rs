//! EIP-191 `personal_sign` signer recovery.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wallets sign the login challenge with `personal_sign`, which hashes
//! `"\x19Ethereum Signed Message:\n" + len(message) + message` with
//! Keccak-256. Login rebuilds the challenge, recovers the public key from
//! the 65-byte `r || s || v` signature, and compares the derived address
//! with the one the client claimed.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Keccak256};

use crate::services::session::bytes_to_hex;

const SIGNATURE_LEN: usize = 65;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid address")]
    InvalidAddress,
    #[error("signature must be 65 hex-encoded bytes")]
    InvalidEncoding,
    #[error("invalid recovery id {0}")]
    InvalidRecoveryId(u8),
    #[error("signer recovery failed")]
    RecoveryFailed,
}

#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Digest a wallet signs for `message` under `personal_sign`.
#[must_use]
pub fn personal_message_hash(message: &str) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(format!("\x19Ethereum Signed Message:\n{}", message.len()).as_bytes());
    hasher.update(message.as_bytes());
    hasher.finalize().into()
}

/// Canonical lower-case form of a wallet address, as the client's
/// [`session::Address`] renders it.
///
/// # Errors
///
/// [`SignatureError::InvalidAddress`] for anything else.
pub fn normalize_address(raw: &str) -> Result<String, SignatureError> {
    session::Address::parse(raw)
        .map(String::from)
        .map_err(|_| SignatureError::InvalidAddress)
}

/// Decode a `0x`-prefixed 65-byte signature.
///
/// # Errors
///
/// [`SignatureError::InvalidEncoding`] on bad hex or wrong length.
pub fn parse_signature(raw: &str) -> Result<[u8; SIGNATURE_LEN], SignatureError> {
    let raw = raw.trim();
    let hex_part = raw.strip_prefix("0x").unwrap_or(raw);
    let bytes = hex::decode(hex_part).map_err(|_| SignatureError::InvalidEncoding)?;
    bytes.try_into().map_err(|_| SignatureError::InvalidEncoding)
}

/// Recovery id from the trailing `v` byte (27/28 or 0/1).
///
/// # Errors
///
/// [`SignatureError::InvalidRecoveryId`] for any other value.
pub fn recovery_id(v: u8) -> Result<RecoveryId, SignatureError> {
    let byte = match v {
        27 | 28 => v - 27,
        0 | 1 => v,
        other => return Err(SignatureError::InvalidRecoveryId(other)),
    };
    RecoveryId::from_byte(byte).ok_or(SignatureError::InvalidRecoveryId(v))
}

/// Ethereum address of a public key: last 20 bytes of Keccak-256 over the
/// uncompressed point without its `0x04` tag.
#[must_use]
pub fn address_of(key: &VerifyingKey) -> String {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    format!("0x{}", bytes_to_hex(&hash[12..]))
}

/// Recover the address that produced `signature` over `message`.
///
/// # Errors
///
/// Encoding, recovery-id, or curve recovery failures.
pub fn recover_personal_signer(message: &str, signature: &str) -> Result<String, SignatureError> {
    let bytes = parse_signature(signature)?;
    let recovery_id = recovery_id(bytes[64])?;
    let signature = Signature::from_slice(&bytes[..64]).map_err(|_| SignatureError::InvalidEncoding)?;

    let key = VerifyingKey::recover_from_prehash(&personal_message_hash(message), &signature, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;
    Ok(address_of(&key))
}

#[cfg(test)]
#[path = "signature_test.rs"]
mod tests;
