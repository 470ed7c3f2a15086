//! # activity-board-client
//!
//! Leptos + WASM frontend for the activity signup board.
//!
//! This crate contains the page, components, board state, and REST helpers.
//! Browser-only code (HTTP calls, timers, focus handling) is gated behind the
//! `hydrate` feature; the `ssr` feature lets the page host render the shell.

pub mod app;
pub mod components;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
