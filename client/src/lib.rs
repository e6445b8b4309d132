//! # client
//!
//! Leptos + WASM frontend for the Ehya marketing site.
//!
//! This crate contains the landing page, its section components, the local
//! UI state (contact form and mobile menu), and the static page copy. The
//! `server` crate renders it with `leptos_axum`; the `hydrate` build attaches
//! the reactive handlers in the browser.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: wire logging, then hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating ehya landing page");
    leptos::mount::hydrate_body(app::App);
}
