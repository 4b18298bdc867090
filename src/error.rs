//! Setup failures for page components.
//!
//! ERROR HANDLING
//! ==============
//! A component whose markup is absent is skipped, never fatal. The entry
//! point logs these and moves on to the next component, so the variants
//! exist for diagnostics rather than for user-facing recovery.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("missing element: {selector}")]
    MissingElement { selector: String },
    #[error("js error: {0}")]
    Js(String),
}

impl SetupError {
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }

    /// Whether the failure is just absent markup (an expected page variant).
    pub fn is_missing_markup(&self) -> bool {
        matches!(self, Self::MissingElement { .. })
    }
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for SetupError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
