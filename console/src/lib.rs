//! # console
//!
//! Leptos CSR front end for the warehouse inventory backend.
//!
//! This crate holds the pages, components, reactive state, and REST client.
//! Session lifecycle and role gating live in the `session` crate; this crate
//! mirrors the session into a signal and routes around it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console_log init failed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
