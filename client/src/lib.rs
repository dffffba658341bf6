//! # client
//!
//! Leptos + WASM frontend for the portfolio site.
//!
//! This crate contains the page, section components, per-section UI state and
//! the contact delivery collaborators. The server renders it with the `ssr`
//! feature; the browser bundle hydrates it with `hydrate`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
