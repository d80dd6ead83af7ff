//! Error types for DOM measurement

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Why a container could not be measured
#[derive(Debug, Clone, Error)]
pub enum MeasureError {
    #[error("no global window (not running in a browser)")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("DOM call {call} failed: {message}")]
    Dom { call: &'static str, message: String },
}

impl MeasureError {
    /// Wrap a JS exception thrown by a DOM call
    pub fn dom(call: &'static str, err: JsValue) -> Self {
        MeasureError::Dom { call, message: js_message(&err) }
    }
}

/// Best-effort text of a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub type MeasureResult<T> = Result<T, MeasureError>;
