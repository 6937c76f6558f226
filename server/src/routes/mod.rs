//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the wallet auth API, the Spine asset files, the
//! Leptos SSR pages (`/`, `/my-gods`, `/god/{id}`, `/god-viewer/{id}`),
//! and the hydrate bundle under `/pkg`. Anything else is a plain-text 404.

pub mod auth;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Auth API and health check.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/nonce", post(auth::nonce))
        .route("/api/login", post(auth::login))
        .route("/api/validate-token", get(auth::validate_token))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Viewer assets read by the Spine runtime.
fn asset_routes(public_dir: &Path) -> Router {
    Router::new()
        .nest_service("/spine-files", ServeDir::new(public_dir.join("spine-files")))
        .route_service("/spritesheet.png", ServeFile::new(public_dir.join("spritesheet.png")))
}

/// Everything except the SSR pages, with the 404 fallback.
pub(crate) fn base_router(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();
    api_routes(state).merge(asset_routes(&public_dir)).fallback(not_found)
}

/// Full application: API + assets + Leptos SSR + `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_router(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
