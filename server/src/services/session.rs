//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! A successful wallet login creates one row in `sessions` keyed by a
//! random 32-byte hex token. The token is the only credential: clients
//! send it as `Authorization: Bearer <token>` and validation resolves it
//! back to the signing address while it is unexpired.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Create a session for `address`, returning the token.
pub async fn create_session(pool: &PgPool, address: &str, ttl_hours: u32) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query(
        "INSERT INTO sessions (token, address, expires_at)
         VALUES ($1, $2, now() + make_interval(hours => $3))",
    )
    .bind(&token)
    .bind(address)
    .bind(i32::try_from(ttl_hours).unwrap_or(i32::MAX))
    .execute(pool)
    .await?;
    Ok(token)
}

/// Resolve a live session token to its address.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<String>, sqlx::Error> {
    let row = sqlx::query("SELECT address FROM sessions WHERE token = $1 AND expires_at > now()")
        .bind(token)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("address")))
}

/// Remove expired sessions; returns how many were deleted.
pub async fn purge_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()").execute(pool).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
