//! # greetings-web
//!
//! Leptos + WASM frontend for two small sites: the greetings demo app
//! (login, register, list/write/delete greetings) and the marketing site
//! widgets (paginated latest-articles list, collapsible footer navigation).
//!
//! This crate contains pages, components, client-side state, the REST
//! client, and build-time configuration. Nothing here persists across page
//! loads; the backend that serves `/auth` and `/api` lives elsewhere.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/console logging hooks and hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).unwrap_or_default();
    leptos::mount::hydrate_body(app::App);
}
