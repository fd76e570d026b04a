// ============================================================================
// JFAST - Helpers DOM encadenables para Rust/WASM
// ============================================================================
// Organización:
// - dom:      Selection + clases/atributos/estilos, eventos, efectos, traversal
// - services: Requests HTTP (XHR con callbacks, fetch async)
// - utils:    Helpers de colecciones + constantes
// - config:   Configuración en tiempo de compilación
// - error:    JfastError
//
// No se registra nada en `window`: el punto de entrada es `jfast::select`.
// ============================================================================

pub mod config;
pub mod dom;
pub mod error;
pub mod services;
pub mod utils;

use std::sync::Once;

use wasm_bindgen::prelude::*;

pub use dom::{select, Content, ElementBuilder, EventHandler, Selection};
pub use error::{JfastError, Result};
pub use services::{ajax, AjaxOptions, ApiClient, ApiResponse, ResponseBody};

use crate::config::CONFIG;

static INIT: Once = Once::new();

/// Inicializar panic hook + logging. Se puede llamar varias veces.
#[wasm_bindgen(js_name = jfastInit)]
pub fn init() {
    INIT.call_once(|| {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::new(CONFIG.level()));
            log::info!("🚀 jfast {} listo", env!("CARGO_PKG_VERSION"));
        }
    });
}
