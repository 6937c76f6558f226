use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use k256::ecdsa::SigningKey;
use tokio::sync::Mutex;

use super::*;
use crate::services::session::{bytes_to_hex, generate_token};
use crate::services::signature::{address_of, personal_message_hash};

pub const TEST_PRIVATE_KEY: &str = "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
pub const TEST_ADDRESS: &str = "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23";

/// In-memory [`LoginStore`] with real expiry semantics.
#[derive(Default)]
pub struct MemoryLoginStore {
    nonces: Mutex<HashMap<String, (String, Instant)>>,
    sessions: Mutex<HashMap<String, (String, Instant)>>,
}

impl MemoryLoginStore {
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn has_nonce(&self, address: &str) -> bool {
        self.nonces.lock().await.contains_key(address)
    }
}

#[async_trait]
impl LoginStore for MemoryLoginStore {
    async fn put_nonce(&self, address: &str, nonce: &str, ttl_secs: u32) -> Result<(), sqlx::Error> {
        let expires = Instant::now() + Duration::from_secs(u64::from(ttl_secs));
        self.nonces.lock().await.insert(address.to_owned(), (nonce.to_owned(), expires));
        Ok(())
    }

    async fn take_nonce(&self, address: &str) -> Result<Option<String>, sqlx::Error> {
        let entry = self.nonces.lock().await.remove(address);
        Ok(entry.and_then(|(nonce, expires)| (expires > Instant::now()).then_some(nonce)))
    }

    async fn create_session(&self, address: &str, ttl_hours: u32) -> Result<String, sqlx::Error> {
        let token = generate_token();
        let expires = Instant::now() + Duration::from_secs(u64::from(ttl_hours) * 3600);
        self.sessions.lock().await.insert(token.clone(), (address.to_owned(), expires));
        Ok(token)
    }

    async fn session_address(&self, token: &str) -> Result<Option<String>, sqlx::Error> {
        let sessions = self.sessions.lock().await;
        Ok(sessions
            .get(token)
            .filter(|(_, expires)| *expires > Instant::now())
            .map(|(address, _)| address.clone()))
    }

    async fn purge_expired(&self) -> Result<u64, sqlx::Error> {
        let now = Instant::now();
        let mut removed = 0;
        for map in [&self.nonces, &self.sessions] {
            let mut map = map.lock().await;
            let before = map.len();
            map.retain(|_, (_, expires)| *expires > now);
            removed += (before - map.len()) as u64;
        }
        Ok(removed)
    }
}

/// `AppState` over a fresh in-memory store with default config.
#[must_use]
pub fn test_app_state() -> (AppState, Arc<MemoryLoginStore>) {
    let store = Arc::new(MemoryLoginStore::default());
    let state = AppState::new(store.clone(), Config::with_database_url("postgres://unused"));
    (state, store)
}

/// `personal_sign` of `message` by the test key, as a wallet returns it.
#[must_use]
pub fn sign_personal(message: &str) -> String {
    let key = SigningKey::from_slice(&hex::decode(TEST_PRIVATE_KEY).unwrap()).unwrap();
    assert_eq!(address_of(key.verifying_key()), TEST_ADDRESS);
    let (signature, recovery_id) = key.sign_prehash_recoverable(&personal_message_hash(message)).unwrap();
    let mut bytes = signature.to_bytes().to_vec();
    bytes.push(recovery_id.to_byte() + 27);
    format!("0x{}", bytes_to_hex(&bytes))
}
