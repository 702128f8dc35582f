//! # closet-admin
//!
//! Leptos + WASM admin console for the Closet rental/resale marketplace.
//! Operators review user reports, apply moderation actions, browse member
//! accounts, and inspect a reportee's rental chat history.
//!
//! This crate contains pages, components, application state, the wire
//! DTOs, and the REST client. It renders on the server (`ssr` feature),
//! hydrates in the browser (`hydrate` feature), and compiles natively
//! with no features so the test suite runs under plain `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
