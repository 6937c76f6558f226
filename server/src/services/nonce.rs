//! Login challenge nonces.
//!
//! TRADE-OFFS
//! ==========
//! One live nonce per address: issuing replaces the previous row, and
//! consumption is destructive (`DELETE ... RETURNING`) so a nonce is
//! single use even when it has already expired.

use rand::Rng;
use sqlx::{PgPool, Row};

use crate::services::session::bytes_to_hex;

/// Random 16-byte hex nonce.
#[must_use]
pub fn generate_nonce() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// The message the wallet signs. Login rebuilds it from the stored nonce,
/// so it must depend only on these inputs.
#[must_use]
pub fn challenge_message(site_name: &str, address: &str, nonce: &str, chain_id: u64) -> String {
    format!(
        "{site_name} wants you to sign in with your Ethereum account:\n{address}\n\nNonce: {nonce}\nChain ID: {chain_id}"
    )
}

/// Store a fresh nonce for `address`, replacing any previous one.
pub async fn issue_nonce(pool: &PgPool, address: &str, nonce: &str, ttl_secs: u32) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"INSERT INTO login_nonces (address, nonce, expires_at)
          VALUES ($1, $2, now() + make_interval(secs => $3))
          ON CONFLICT (address) DO UPDATE
          SET nonce = EXCLUDED.nonce, expires_at = EXCLUDED.expires_at",
    )
    .bind(address)
    .bind(nonce)
    .bind(f64::from(ttl_secs))
    .execute(pool)
    .await?;
    Ok(())
}

/// Remove the nonce for `address`, returning it only if it was still live.
pub async fn consume_nonce(pool: &PgPool, address: &str) -> Result<Option<String>, sqlx::Error> {
    let row = sqlx::query("DELETE FROM login_nonces WHERE address = $1 RETURNING nonce, expires_at > now() AS live")
        .bind(address)
        .fetch_optional(pool)
        .await?;

    Ok(row.and_then(|r| r.get::<bool, _>("live").then(|| r.get("nonce"))))
}

/// Remove expired nonces; returns how many were deleted.
pub async fn purge_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM login_nonces WHERE expires_at <= now()").execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
#[path = "nonce_test.rs"]
mod tests;
