#![allow(non_snake_case)]

pub mod components;
pub mod services;

mod app;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // `tracing` to the browser console, with the core's `log` records bridged in
    tracing_wasm::set_as_global_default();
    if let Err(e) = tracing_log::LogTracer::init() {
        web_sys::console::warn_1(&format!("Failed to initialize LogTracer: {e}").into());
    }
    tracing::info!("Starting Movie Catalog frontend (Leptos)");

    // Remove loading placeholder
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(loader) = document.get_element_by_id("app-loading") {
                loader.remove();
            }
        }
    }

    leptos::mount::mount_to_body(app::App);
}
