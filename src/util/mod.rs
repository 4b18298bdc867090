//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (DOM lookups, storage, listener
//! registration) from component wiring, and keep the string building for
//! icons and `mailto:` links testable without a browser.

#[cfg(feature = "csr")]
pub mod dom;
pub mod icons;
pub mod mailto;
pub mod storage;
