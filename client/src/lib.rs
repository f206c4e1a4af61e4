//! # client
//!
//! Leptos + WASM frontend for the setlist song manager.
//!
//! This crate contains the router, pages, components, songs page state and
//! the REST client for the song service. The `server` crate renders it with
//! the `ssr` feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
