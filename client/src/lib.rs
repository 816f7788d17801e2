//! # client
//!
//! Leptos + WASM application shell: collapsible sidebar navigation, a header,
//! and a light/dark theme toggle.
//!
//! The theme and navigation state machines live in the `shell-state` crate;
//! this crate binds them to Leptos signals, browser storage, and `matchMedia`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
