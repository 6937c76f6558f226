//! REST API helpers for the worker's auth endpoints and the Gaia NFT API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since these calls are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` with a message fit for a toast, so
//! pages can surface failures without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use nft::{HeldNft, NftDetail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use session::Address;

/// Base URI of the Gaia API, fixed at build time.
pub const GAIA_API_BASE_URI: &str = match option_env!("GAIA_API_BASE_URI") {
    Some(uri) => uri,
    None => "https://api.gaia.cc",
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceResponse {
    pub nonce: String,
    pub message: String,
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct ValidateResponse {
    valid: bool,
}

#[cfg(any(test, feature = "hydrate"))]
fn nft_detail_endpoint(base: &str, id: &str) -> String {
    format!("{}/gods/{id}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn held_nfts_endpoint(base: &str, address: &Address) -> String {
    format!("{}/gods/held/{address}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn save_metadata_endpoint(base: &str) -> String {
    format!("{}/save-metadata", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn nonce_failed_message(status: u16) -> String {
    format!("nonce request failed: {status}")
}

/// Server `{ "error": ... }` message for a failed login, else a status line.
#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| format!("Login failed (HTTP {status})"))
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(what: &str, status: u16) -> String {
    format!("Failed to load {what} (HTTP {status})")
}

/// Ask the worker for a login challenge via `POST /api/nonce`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server refuses.
pub async fn request_nonce(address: &Address) -> Result<NonceResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "address": address });
        let resp = gloo_net::http::Request::post("/api/nonce")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(nonce_failed_message(resp.status()));
        }
        resp.json::<NonceResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = address;
        Err("not available on server".to_owned())
    }
}

/// Exchange a challenge signature for a bearer token via `POST /api/login`.
///
/// # Errors
///
/// Returns the server's error message, or a status line when it has none.
pub async fn login(address: &Address, signature: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "address": address, "signature": signature });
        let resp = gloo_net::http::Request::post("/api/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(login_failed_message(status, &body));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (address, signature);
        Err("not available on server".to_owned())
    }
}

/// Ask `GET /api/validate-token` whether `token` is still accepted.
///
/// A 401 is a definite `false`; other failures are errors.
///
/// # Errors
///
/// Returns an error string on transport failure or an unexpected status.
pub async fn validate_token(token: &str) -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/validate-token")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Ok(false);
        }
        if !resp.ok() {
            return Err(format!("validate-token failed: {}", resp.status()));
        }
        let body: ValidateResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.valid)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch one God from `GET {api}/gods/{id}`.
///
/// # Errors
///
/// Returns an error string if the request or decoding fails.
pub async fn fetch_nft_detail(id: &str) -> Result<NftDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = nft_detail_endpoint(GAIA_API_BASE_URI, id);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fetch_failed_message("this God", resp.status()));
        }
        resp.json::<NftDetail>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Fetch the Gods held by `address` from `GET {api}/gods/held/{address}`.
///
/// # Errors
///
/// Returns an error string if the request or decoding fails.
pub async fn fetch_held_nfts(address: &Address) -> Result<Vec<HeldNft>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = held_nfts_endpoint(GAIA_API_BASE_URI, address);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fetch_failed_message("your Gods", resp.status()));
        }
        resp.json::<Vec<HeldNft>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = address;
        Err("not available on server".to_owned())
    }
}

/// Save edited attributes via `POST {api}/save-metadata`.
///
/// The payload is validated first, so a record without type or gender fails
/// with `Type/Gender is missing.` before any request is made.
///
/// # Errors
///
/// Returns the validation message, the server's `error` field, or
/// `Failed to save (HTTP <status>)`.
pub async fn save_nft_attributes(id: &str, data: &Value, token: Option<String>) -> Result<(), String> {
    let request = nft::SaveMetadataRequest::from_nft_data(id, data).map_err(|e| e.to_string())?;
    #[cfg(feature = "hydrate")]
    {
        let url = save_metadata_endpoint(GAIA_API_BASE_URI);
        let mut builder = gloo_net::http::Request::post(&url);
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer(&token));
        }
        let resp = builder
            .json(&request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(nft::save_error_message(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, token);
        Err("not available on server".to_owned())
    }
}
