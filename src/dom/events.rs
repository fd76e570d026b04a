// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - `EventHandler` mantiene vivo el Closure mientras exista algún clone del
//   handler. Si se suelta el último clone con el listener todavía registrado,
//   el navegador llamará a una función ya liberada (error en consola): hacer
//   `off` antes, o usar `on_fn`.
// - `on_fn` hace closure.forget(): el listener vive lo que viva la página.
//   Cuando el elemento se destruye, el navegador limpia sus listeners.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Event;

use crate::dom::selection::Selection;
use crate::error::{JfastError, Result};

/// Handler de eventos reutilizable. La identidad es la del handler:
/// sus clones registran/desregistran la MISMA función JS.
#[derive(Clone)]
pub struct EventHandler {
    closure: Rc<Closure<dyn FnMut(Event)>>,
}

impl EventHandler {
    pub fn new<F>(handler: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        Self {
            closure: Rc::new(Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>)),
        }
    }

    fn function(&self) -> &js_sys::Function {
        let closure: &Closure<dyn FnMut(Event)> = &self.closure;
        closure.as_ref().unchecked_ref()
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.closure, &other.closure)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandler")
            .field("refs", &Rc::strong_count(&self.closure))
            .finish()
    }
}

impl Selection {
    /// Registrar `handler` para `event` en todos los elementos (fase bubble).
    /// Registrar dos veces el mismo handler no duplica (lo ignora el navegador).
    pub fn on(self, event: &str, handler: &EventHandler) -> Result<Self> {
        let function = handler.function();
        self.try_each(|element| {
            element
                .add_event_listener_with_callback(event, function)
                .map_err(JfastError::from)
        })
    }

    /// Quitar `handler` de todos los elementos (solo si es el mismo handler)
    pub fn off(self, event: &str, handler: &EventHandler) -> Result<Self> {
        let function = handler.function();
        self.try_each(|element| {
            element
                .remove_event_listener_with_callback(event, function)
                .map_err(JfastError::from)
        })
    }

    /// Helper para registrar un closure simple sin guardar el handler.
    /// Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM;
    /// no se puede quitar con `off`.
    pub fn on_fn<F>(self, event: &str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let result = self.try_each(|element| {
            element
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .map_err(JfastError::from)
        });
        // Puede haber quedado registrado en parte de los elementos aunque falle
        closure.forget();
        result
    }

    /// Disparar `new Event(event)` de forma síncrona en cada elemento
    pub fn trigger(self, event: &str) -> Result<Self> {
        self.try_each(|element| {
            let evt = Event::new(event)?;
            element.dispatch_event(&evt)?;
            Ok(())
        })
    }
}
