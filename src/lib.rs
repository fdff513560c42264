//! # pora
//!
//! Leptos + WASM frontend for the pora social network.
//!
//! This crate contains the page shells, presentational components, PWA chrome,
//! and the three cross-cutting pieces every page depends on: the auth gate,
//! the deployment-aware asset path resolver, and the chat overlay bus.
//! Identity and messaging live in an external backend reached over HTTP.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
