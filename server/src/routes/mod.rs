//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the song REST endpoints and stitches them with Leptos
//! SSR rendering under a single Axum router. Paths that match neither the
//! API nor a page are sent back to the home page.

pub mod songs;

use std::path::PathBuf;

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Song API routes. Served alone when the Leptos configuration is missing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/songs", get(songs::list_songs).post(songs::create_song))
        .route("/api/songs/{id}", put(songs::update_song).delete(songs::delete_song))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Leptos SSR frontend: API routes + Leptos SSR pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` env vars).
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

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(app(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(fallback))
}

async fn fallback(uri: Uri) -> Response {
    match fallback_redirect(uri.path()) {
        Some(target) => Redirect::temporary(target).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Where an unmatched path goes: API paths 404, everything else goes home.
fn fallback_redirect(path: &str) -> Option<&'static str> {
    if path == "/api" || path.starts_with("/api/") || path.starts_with("/pkg/") {
        None
    } else {
        Some("/")
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_page_redirects_home() {
        assert_eq!(fallback_redirect("/albums"), Some("/"));
        assert_eq!(fallback_redirect("/songs/extra/segments"), Some("/"));
    }

    #[test]
    fn unknown_api_path_is_not_redirected() {
        assert_eq!(fallback_redirect("/api/albums"), None);
        assert_eq!(fallback_redirect("/api"), None);
        assert_eq!(fallback_redirect("/pkg/missing.wasm"), None);
    }
}
