//! Storage seam for nonces and sessions.
//!
//! DESIGN
//! ======
//! Handlers talk to a [`LoginStore`] trait object held in `AppState`.
//! [`PgLoginStore`] is the production implementation over the `nonce` and
//! `session` query modules; tests swap in an in-memory store so the full
//! nonce → sign → login → validate flow runs without a database.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::services::{nonce, session};

#[async_trait]
pub trait LoginStore: Send + Sync {
    /// Store `nonce` for `address`, replacing any previous one.
    async fn put_nonce(&self, address: &str, nonce: &str, ttl_secs: u32) -> Result<(), sqlx::Error>;

    /// Remove and return the live nonce for `address`.
    async fn take_nonce(&self, address: &str) -> Result<Option<String>, sqlx::Error>;

    /// Create a session, returning its token.
    async fn create_session(&self, address: &str, ttl_hours: u32) -> Result<String, sqlx::Error>;

    /// Address bound to a live session token.
    async fn session_address(&self, token: &str) -> Result<Option<String>, sqlx::Error>;

    /// Drop expired nonces and sessions; returns rows removed.
    async fn purge_expired(&self) -> Result<u64, sqlx::Error>;
}

pub struct PgLoginStore {
    pool: PgPool,
}

impl PgLoginStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoginStore for PgLoginStore {
    async fn put_nonce(&self, address: &str, nonce: &str, ttl_secs: u32) -> Result<(), sqlx::Error> {
        nonce::issue_nonce(&self.pool, address, nonce, ttl_secs).await
    }

    async fn take_nonce(&self, address: &str) -> Result<Option<String>, sqlx::Error> {
        nonce::consume_nonce(&self.pool, address).await
    }

    async fn create_session(&self, address: &str, ttl_hours: u32) -> Result<String, sqlx::Error> {
        session::create_session(&self.pool, address, ttl_hours).await
    }

    async fn session_address(&self, token: &str) -> Result<Option<String>, sqlx::Error> {
        session::validate_session(&self.pool, token).await
    }

    async fn purge_expired(&self) -> Result<u64, sqlx::Error> {
        Ok(nonce::purge_expired(&self.pool).await? + session::purge_expired(&self.pool).await?)
    }
}
