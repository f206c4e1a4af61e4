mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::{ServerConfig, StoreBackend};
use crate::services::song::PgSongStore;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // A missing .env is the normal case outside local development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().expect("invalid server configuration");

    let state = match &config.store {
        StoreBackend::Postgres { url, max_connections } => {
            let pool = db::init_pool(url, *max_connections)
                .await
                .expect("database init failed");
            tracing::info!(max_connections, "using postgres song store");
            AppState::new(Arc::new(PgSongStore::new(pool)))
        }
        StoreBackend::Memory => {
            tracing::warn!("DATABASE_URL not set; songs are kept in memory only");
            AppState::in_memory()
        }
    };

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos SSR disabled; serving song API only");
            routes::app(state)
        }
    };

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, "setlist listening");
    axum::serve(listener, app).await.expect("server failed");
}
