//! # portfolio-ui
//!
//! Leptos + WASM interactivity layer for a static portfolio page.
//!
//! The page markup is authored by hand; this crate attaches behavior to it
//! once the document is ready: theme persistence, scroll progress,
//! reveal-on-scroll, navigation highlighting, a mobile menu overlay, a
//! scroll-to-top control and a `mailto:` contact form.
//!
//! Browser glue lives behind the `csr` feature. Without it every DOM call
//! compiles to a no-op so the decision logic in `state` and `util` can be
//! tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::*;

/// WASM entry point, invoked when the module is instantiated.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    app::run_when_ready();
}
