//! Shared helpers for WASM API operations
//!
//! Console logging and the serde bridge used by every exported function.
//! Nothing here throws: bad input from JavaScript is logged and replaced by
//! an empty value.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript, falling back to the type's default
///
/// `undefined`/`null` quietly become the default; anything else that fails
/// to decode is logged first.
pub fn deserialize_or_default<T: DeserializeOwned + Default>(value: JsValue, context: &str) -> T {
    if value.is_undefined() || value.is_null() {
        return T::default();
    }

    serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
        crate::wasm_warn!("{}: {} (treating as empty)", context, e);
        T::default()
    })
}

/// Serialize a value to JavaScript; on failure logs and returns `null`
///
/// `None` becomes `null` rather than `undefined`: the gutter tells a blank
/// line apart from a missing entry.
pub fn serialize<T: Serialize>(value: &T, context: &str) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value.serialize(&serializer).unwrap_or_else(|e| {
        crate::wasm_error!("{}: {}", context, e);
        JsValue::NULL
    })
}
