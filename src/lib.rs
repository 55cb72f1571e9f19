//! # proofboard
//!
//! WASM page controllers for the proof leaderboard site. The page itself is
//! generated ahead of time; this crate binds behavior to the existing markup:
//! the navigation sidebar, the proof-type filter over the records table, and
//! the light/dark theme toggle.
//!
//! The `state` and `config` modules are platform independent and unit tested
//! natively. The `dom` and `app` modules exist only with the `hydrate` feature
//! and talk to the browser through `web-sys`.

pub mod config;
pub mod error;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod dom;

pub use config::PageConfig;
pub use error::PageError;

/// Module entrypoint run by the wasm loader before any markup is parsed.
///
/// Applies the persisted theme right away so the first paint already uses it.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if let Err(err) = dom::theme::apply_stored_theme(&config::ThemeConfig::default()) {
        log::warn!("could not apply stored theme: {err}");
    }
}
