//! Wallet auth routes: nonce issue, signature login, token validation.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use crate::services::auth::{self as auth_svc, LoginError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NonceRequest {
    address: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    address: String,
    signature: String,
}

// =============================================================================
// HELPERS
// =============================================================================

/// Token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

pub(crate) fn login_error_status(err: &LoginError) -> StatusCode {
    match err {
        LoginError::Malformed(_) => StatusCode::BAD_REQUEST,
        LoginError::NonceMissing | LoginError::SignerMismatch => StatusCode::UNAUTHORIZED,
        LoginError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn login_failure(err: &LoginError) -> Response {
    let status = login_error_status(err);
    if status.is_server_error() {
        tracing::error!(error = %err, "wallet login storage failure");
        return error_body(status, "internal error");
    }
    error_body(status, &err.to_string())
}

fn invalid_token() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "valid": false }))).into_response()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/nonce`: issue a login challenge for `address`.
pub async fn nonce(State(state): State<AppState>, body: Result<Json<NonceRequest>, JsonRejection>) -> Response {
    let Ok(Json(req)) = body else {
        return error_body(StatusCode::BAD_REQUEST, "invalid request body");
    };
    match auth_svc::issue_challenge(state.store.as_ref(), &state.config, &req.address).await {
        Ok(challenge) => Json(challenge).into_response(),
        Err(e) => login_failure(&e),
    }
}

/// `POST /api/login`: exchange a signed challenge for a session token.
pub async fn login(State(state): State<AppState>, body: Result<Json<LoginRequest>, JsonRejection>) -> Response {
    let Ok(Json(req)) = body else {
        return error_body(StatusCode::BAD_REQUEST, "invalid request body");
    };
    match auth_svc::login(state.store.as_ref(), &state.config, &req.address, &req.signature).await {
        Ok(token) => Json(json!({ "token": token })).into_response(),
        Err(e) => login_failure(&e),
    }
}

/// `GET /api/validate-token`: report whether the bearer token is live.
pub async fn validate_token(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return invalid_token();
    };
    match state.store.session_address(token).await {
        Ok(Some(address)) => Json(json!({ "valid": true, "address": address })).into_response(),
        Ok(None) => invalid_token(),
        Err(e) => {
            tracing::error!(error = %e, "session lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
