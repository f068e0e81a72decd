//! launchpad Web Frontend
//!
//! Leptos-based WASM landing site: hero, feature accordion, call to action
//! and a pricing page with checkout.

mod api;
mod app;
mod components;
mod config;
mod content;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}
