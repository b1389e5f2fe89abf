//! # blog-admin
//!
//! Leptos + WASM admin dashboard for the Balosh blogging platform.
//!
//! The crate is organized around the session lifecycle: `util::token_store`
//! persists the bearer credential, `state::session_context` turns it into a
//! signed-in profile via the REST API in `net`, and `util::route_guard`
//! decides what each route may show. Pages and components are thin Leptos
//! glue over those pieces.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("logger already installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
