//! Frontier Recruitments - ACM SIGKDD recruitment landing page
//!
//! A single-page site with a timed hero reveal, a live countdown to the application
//! deadline and a registration form, built with Leptos and WebAssembly. The axum
//! server renders the page and forwards applications to the hosted database.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
