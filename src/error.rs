//! Structured error types for vitrine.
//!
//! Most DOM fallibility is absorbed at the call site (a missing element
//! disables one feature, never the whole page), so errors here surface only
//! through the wasm boundary and the options parser.

/// All errors that can occur while wiring or driving the page.
#[derive(Debug, thiserror::Error)]
pub enum VitrineError {
    /// The browser environment is missing a required global (window/document).
    #[error("Browser environment unavailable: {0}")]
    Environment(String),

    /// Options passed from JavaScript failed to deserialize.
    #[error("Invalid options: {0}")]
    Options(String),

    /// Snapshot serialization failure.
    #[error("Snapshot serialization: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VitrineError>;

impl From<String> for VitrineError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for VitrineError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<VitrineError> for wasm_bindgen::JsValue {
    fn from(e: VitrineError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
