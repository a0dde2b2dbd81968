//! # angola-admin
//!
//! Leptos + WASM administration console for the Angola services marketplace.
//! Replaces the React `angola-admin/` SPA with a Rust-native UI layer.
//!
//! This crate contains pages, components, per-screen state, the persisted
//! session store, and the authenticated HTTP layer used to talk to the
//! marketplace REST API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

/// WASM entry point: installs panic/log hooks and hydrates the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
