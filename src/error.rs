// ============================================================================
// ERRORES - Tipo de error único de la librería
// ============================================================================
// Las APIs del navegador devuelven JsValue como error; aquí lo convertimos a
// un enum tipado para que el código Rust pueda hacer match. La conversión
// inversa (JfastError -> JsValue) permite usar `?` desde funciones
// #[wasm_bindgen].
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum JfastError {
    #[error("No window available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("Element has no inline style (neither HTML nor SVG)")]
    NoInlineStyle,

    #[error("Element is not an HtmlElement")]
    NotHtmlElement,

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, JfastError>;

impl JfastError {
    /// Construir un error de selector a partir de la excepción de querySelectorAll/matches
    pub fn selector(selector: &str, cause: JsValue) -> Self {
        JfastError::Selector {
            selector: selector.to_string(),
            message: describe_js_value(&cause),
        }
    }
}

impl From<JsValue> for JfastError {
    fn from(value: JsValue) -> Self {
        JfastError::Dom(describe_js_value(&value))
    }
}

impl From<JfastError> for JsValue {
    fn from(error: JfastError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// Texto legible de una excepción JS (DOMException, Error, string...)
pub(crate) fn describe_js_value(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    // DOMException y Error exponen `message`
    if let Ok(message) = js_sys::Reflect::get(value, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{:?}", value)
}
