//! # tutorhub-client
//!
//! Leptos + WASM frontend for the TutorHub tutoring marketplace. Two
//! portals (hub operators and students) share one generic session core:
//! per-namespace session context, a localStorage-backed session store, a
//! route guard for protected screens, and the auth operations that keep
//! store and context in agreement.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod util;

/// Browser entry point: installs panic/console logging and hydrates the
/// server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
