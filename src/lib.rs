//! # hearth-client
//!
//! Leptos + WASM frontend for Hearth, a shared family organizer.
//!
//! This crate contains the navigation layer of the app: the typed route
//! table, the role-selection navigation guard, the persisted role store,
//! and the page components behind each route.

pub mod app;
pub mod pages;
pub mod router;
pub mod state;
pub mod storage;

/// Browser entry point: hydrate the server-rendered page into the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
