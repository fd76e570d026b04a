// ============================================================================
// ANIMATION - Registro de animaciones en curso + bucle de ticks
// ============================================================================
// Cada elemento tiene como mucho UNA animación en curso. Empezar otra
// (fade o slide) cancela la anterior: su token queda marcado y sus ticks y
// timeouts pendientes no hacen nada al dispararse.
//
// Los ticks usan requestAnimationFrame si existe y, si no, un Timeout de
// ~16ms. El avance de opacidad usa el tiempo real entre ticks, no un
// presupuesto fijo por frame.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::element::{set_style, style_of, window};
use crate::error::Result;

/// Token de una animación en curso; sus clones comparten el flag de cancelación
#[derive(Debug, Clone, Default)]
pub struct AnimationToken {
    cancelled: Rc<Cell<bool>>,
}

impl AnimationToken {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    fn cancel(&self) {
        self.cancelled.set(true);
    }

    fn same(&self, other: &AnimationToken) -> bool {
        Rc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

thread_local! {
    static IN_FLIGHT: RefCell<Vec<(Element, AnimationToken)>> = RefCell::new(Vec::new());
}

/// Registrar una animación nueva para `element`, cancelando la que hubiera
pub(crate) fn begin(element: &Element) -> AnimationToken {
    let token = AnimationToken::default();
    IN_FLIGHT.with(|in_flight| {
        let mut in_flight = in_flight.borrow_mut();
        if let Some(pos) = in_flight.iter().position(|(e, _)| e == element) {
            let (_, previous) = in_flight.swap_remove(pos);
            previous.cancel();
            log::debug!("⏹️ [FX] Animación previa cancelada (reemplazada)");
        }
        in_flight.push((element.clone(), token.clone()));
    });
    token
}

/// Marcar la animación como terminada (solo si sigue siendo la registrada)
pub(crate) fn finish(element: &Element, token: &AnimationToken) {
    IN_FLIGHT.with(|in_flight| {
        let mut in_flight = in_flight.borrow_mut();
        if let Some(pos) = in_flight
            .iter()
            .position(|(e, t)| e == element && t.same(token))
        {
            in_flight.swap_remove(pos);
        }
    });
}

/// Cancelar la animación en curso de `element`. Devuelve true si había una.
pub(crate) fn cancel(element: &Element) -> bool {
    IN_FLIGHT.with(|in_flight| {
        let mut in_flight = in_flight.borrow_mut();
        match in_flight.iter().position(|(e, _)| e == element) {
            Some(pos) => {
                let (_, token) = in_flight.swap_remove(pos);
                token.cancel();
                true
            }
            None => false,
        }
    })
}

/// Ejecutar el arranque síncrono de una animación; si falla, la animación se
/// da por terminada para que no quede registrada.
pub(crate) fn finish_on_error<T, F>(element: &Element, token: &AnimationToken, setup: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    setup().inspect_err(|e| {
        log::warn!("⚠️ [FX] No se pudo arrancar la animación: {}", e);
        finish(element, token);
    })
}

/// ¿Tiene `element` una animación en curso?
pub fn is_animating(element: &Element) -> bool {
    IN_FLIGHT.with(|in_flight| in_flight.borrow().iter().any(|(e, _)| e == element))
}

/// Número de animaciones en curso en la página
pub fn in_flight_count() -> usize {
    IN_FLIGHT.with(|in_flight| in_flight.borrow().len())
}

// ----------------------------------------------------------------------------
// Fade
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

impl FadeDirection {
    pub fn start_opacity(self) -> f64 {
        match self {
            FadeDirection::In => 0.0,
            FadeDirection::Out => 1.0,
        }
    }
}

/// Opacidad tras `elapsed_ms` de un fade de `duration_ms` (sin clamp)
pub fn next_opacity(current: f64, elapsed_ms: f64, duration_ms: f64, direction: FadeDirection) -> f64 {
    let step = elapsed_ms.max(0.0) / duration_ms.max(1.0);
    match direction {
        FadeDirection::In => current + step,
        FadeDirection::Out => current - step,
    }
}

/// El fade termina al cruzar 1 (entrada) o 0 (salida)
pub fn is_fade_finished(opacity: f64, direction: FadeDirection) -> bool {
    match direction {
        FadeDirection::In => opacity >= 1.0,
        FadeDirection::Out => opacity <= 0.0,
    }
}

struct FadeState {
    element: Element,
    direction: FadeDirection,
    duration_ms: f64,
    opacity: f64,
    last: f64,
    token: AnimationToken,
}

/// Arrancar el fade de un elemento: fija la opacidad inicial y hace el primer tick
pub(crate) fn start_fade(element: &Element, direction: FadeDirection, duration_ms: u32) -> Result<()> {
    style_of(element)?;
    let token = begin(element);
    let opacity = direction.start_opacity();
    finish_on_error(element, &token, || {
        set_style(element, "opacity", &opacity.to_string())?;
        if direction == FadeDirection::In {
            set_style(element, "display", "")?;
        }
        Ok(())
    })?;

    fade_tick(FadeState {
        element: element.clone(),
        direction,
        duration_ms: f64::from(duration_ms),
        opacity,
        last: js_sys::Date::now(),
        token,
    });
    Ok(())
}

fn fade_tick(mut state: FadeState) {
    if state.token.is_cancelled() {
        return;
    }

    let now = js_sys::Date::now();
    state.opacity = next_opacity(state.opacity, now - state.last, state.duration_ms, state.direction);
    state.last = now;

    let written = state.opacity.clamp(0.0, 1.0);
    if let Err(e) = set_style(&state.element, "opacity", &written.to_string()) {
        log::warn!("⚠️ [FX] No se pudo actualizar opacity: {}", e);
        finish(&state.element, &state.token);
        return;
    }

    if !is_fade_finished(state.opacity, state.direction) {
        schedule_frame(move || fade_tick(state));
        return;
    }

    if state.direction == FadeDirection::Out {
        if let Err(e) = set_style(&state.element, "display", "none") {
            log::warn!("⚠️ [FX] No se pudo ocultar el elemento: {}", e);
        }
    }
    finish(&state.element, &state.token);
}

/// Programar `callback` en el próximo frame (requestAnimationFrame o Timeout de respaldo).
/// Si requestAnimationFrame rechaza el callback, se usa el Timeout: ningún tick se pierde.
pub(crate) fn schedule_frame<F>(callback: F)
where
    F: FnOnce() + 'static,
{
    let pending = Rc::new(Cell::new(Some(callback)));

    if let Ok(win) = window() {
        let has_raf = js_sys::Reflect::has(&win, &JsValue::from_str("requestAnimationFrame")).unwrap_or(false);
        if has_raf {
            let slot = pending.clone();
            let closure = Closure::once_into_js(move || {
                if let Some(callback) = slot.take() {
                    callback();
                }
            });
            match win.request_animation_frame(closure.unchecked_ref()) {
                Ok(_) => return,
                Err(e) => log::warn!("⚠️ [FX] requestAnimationFrame falló, usando timeout: {:?}", e),
            }
        }
    }

    if let Some(callback) = pending.take() {
        Timeout::new(CONFIG.frame_fallback_ms, callback).forget();
    }
}

/// Programar `callback` tras `delay_ms` salvo que el token se cancele antes
pub(crate) fn schedule_after<F>(delay_ms: u32, token: &AnimationToken, callback: F)
where
    F: FnOnce() + 'static,
{
    let token = token.clone();
    Timeout::new(delay_ms, move || {
        if !token.is_cancelled() {
            callback();
        }
    })
    .forget();
}
