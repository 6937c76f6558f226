#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::store::{LoginStore, PgLoginStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");
    let pool = db::init_pool(&config).await.expect("database init failed");

    let store: Arc<dyn LoginStore> = Arc::new(PgLoginStore::new(pool));
    let _sweeper = db::spawn_expiry_sweeper(store.clone());

    let port = config.port;
    let state = state::AppState::new(store, config);
    let app = routes::leptos_app(state).expect("leptos app init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "gods-server listening");
    axum::serve(listener, app).await.expect("server failed");
}
