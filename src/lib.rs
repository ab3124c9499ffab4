//! Trusted-by section - animated partner and API statistics panel
//!
//! A landing page section rendered with Leptos (SSR + hydration) that reveals
//! its content in a staggered cascade once it scrolls into view.

#![recursion_limit = "512"]

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
