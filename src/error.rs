//! Error type shared by the config loader and the browser glue.
//!
//! Missing elements are expected on variant page layouts; callers log them
//! at debug level and disable the affected feature instead of failing.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl UiError {
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement(what.into())
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
