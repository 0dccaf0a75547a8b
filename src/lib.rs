//! # studyhall
//!
//! Leptos + WASM frontend for the exam-prep classroom platform.
//!
//! This crate contains pages, components, client-side stores, network types,
//! and the REST client. Everything that decides *what* the UI does (load
//! flows, confirmation gating, derived due/grade status, widget state
//! machines) lives in plain state types under `state`, `actions`, and `util`
//! so it can be tested natively without a browser.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: installs diagnostics and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
