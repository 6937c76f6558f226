//! Environment-driven server configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (if present) and builds one [`Config`] at startup.
//! Handlers read it through `AppState`; nothing re-reads the environment
//! after boot.

use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LOGIN_CHAIN_ID: u64 = 1;
const DEFAULT_NONCE_TTL_SECS: u32 = 300;
const DEFAULT_SESSION_TTL_HOURS: u32 = 168;
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_SITE_NAME: &str = "The Gods";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} required")]
    Missing(&'static str),
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    /// Chain id embedded in the login challenge.
    pub login_chain_id: u64,
    pub nonce_ttl_secs: u32,
    pub session_ttl_hours: u32,
    /// Root of `/spine-files` and `/spritesheet.png`.
    pub public_dir: PathBuf,
    /// Name shown in the login challenge.
    pub site_name: String,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is unset or a numeric variable
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env_string("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        Ok(Self {
            database_url,
            port: env_parse("PORT", DEFAULT_PORT)?,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            login_chain_id: env_parse("LOGIN_CHAIN_ID", DEFAULT_LOGIN_CHAIN_ID)?,
            nonce_ttl_secs: env_parse("NONCE_TTL_SECS", DEFAULT_NONCE_TTL_SECS)?,
            session_ttl_hours: env_parse("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS)?,
            public_dir: env_string("PUBLIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR), PathBuf::from),
            site_name: env_string("SITE_NAME").unwrap_or_else(|| DEFAULT_SITE_NAME.to_owned()),
        })
    }

    /// Defaults with the given database URL.
    #[must_use]
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            port: DEFAULT_PORT,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            login_chain_id: DEFAULT_LOGIN_CHAIN_ID,
            nonce_ttl_secs: DEFAULT_NONCE_TTL_SECS,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            site_name: DEFAULT_SITE_NAME.to_owned(),
        }
    }
}

/// Non-empty, trimmed value of `key`.
pub(crate) fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Parse `key`, falling back to `default` when unset or blank.
pub(crate) fn env_parse<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env_string(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
