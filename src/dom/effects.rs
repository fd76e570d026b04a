// ============================================================================
// EFFECTS - hide/show, fadeIn/fadeOut, slideUp/slideDown, stop
// ============================================================================
// `duration_ms = None` (o 0) usa la duración por defecto de CONFIG (400ms).
// El slide delega la interpolación en las transiciones CSS y limpia los
// estilos con timeouts basados SOLO en la duración (no escucha transitionend).
// ============================================================================

use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::animation::{self, FadeDirection};
use crate::dom::element::{as_html_element, set_style, style_of};
use crate::dom::selection::Selection;
use crate::error::{JfastError, Result};
use crate::utils::constants::SLIDE_TRANSITION_PROPERTY;

const BOX_PROPERTIES: [&str; 4] = ["padding-top", "padding-bottom", "margin-top", "margin-bottom"];

impl Selection {
    /// display: none en todos los elementos
    pub fn hide(self) -> Result<Self> {
        self.try_each(|element| set_style(element, "display", "none"))
    }

    /// Quitar el display inline (vuelve al display de la hoja de estilos)
    pub fn show(self) -> Result<Self> {
        self.try_each(|element| set_style(element, "display", ""))
    }

    pub fn fade_in(self, duration_ms: Option<u32>) -> Result<Self> {
        self.fade(FadeDirection::In, duration_ms)
    }

    /// Al terminar, el elemento queda con display: none
    pub fn fade_out(self, duration_ms: Option<u32>) -> Result<Self> {
        self.fade(FadeDirection::Out, duration_ms)
    }

    // Los efectos validan TODOS los elementos antes de arrancar ninguno: una
    // selección mixta falla entera, sin dejar animaciones a medias.

    fn fade(self, direction: FadeDirection, duration_ms: Option<u32>) -> Result<Self> {
        let duration = CONFIG.duration_or_default(duration_ms);
        log::debug!("🎞️ [FX] fade {:?} {}ms en {} elementos", direction, duration, self.len());
        self.iter().try_for_each(|element| style_of(element).map(drop))?;
        self.try_each(|element| animation::start_fade(element, direction, duration))
    }

    /// Solo elementos HTML (necesita offsetHeight)
    pub fn slide_up(self, duration_ms: Option<u32>) -> Result<Self> {
        let duration = CONFIG.duration_or_default(duration_ms);
        log::debug!("🎞️ [FX] slide_up {}ms en {} elementos", duration, self.len());
        self.iter().try_for_each(|element| as_html_element(element).map(drop))?;
        self.try_each(|element| slide_up_element(element, duration))
    }

    /// Solo elementos HTML (necesita offsetHeight)
    pub fn slide_down(self, duration_ms: Option<u32>) -> Result<Self> {
        let duration = CONFIG.duration_or_default(duration_ms);
        log::debug!("🎞️ [FX] slide_down {}ms en {} elementos", duration, self.len());
        self.iter().try_for_each(|element| as_html_element(element).map(drop))?;
        self.try_each(|element| slide_down_element(element, duration))
    }

    /// Cancelar las animaciones en curso. Los estilos quedan donde estén.
    pub fn stop(self) -> Self {
        let stopped = self.iter().filter(|element| animation::cancel(element)).count();
        if stopped > 0 {
            log::debug!("⏹️ [FX] {} animaciones detenidas", stopped);
        }
        self
    }

    /// ¿Algún elemento tiene una animación en curso?
    pub fn is_animating(&self) -> bool {
        self.iter().any(animation::is_animating)
    }
}

fn collapse(element: &Element) -> Result<()> {
    set_style(element, "height", "0")?;
    for property in BOX_PROPERTIES {
        set_style(element, property, "0")?;
    }
    Ok(())
}

fn set_transition(element: &Element, duration_ms: u32) -> Result<()> {
    set_style(element, "transition-property", SLIDE_TRANSITION_PROPERTY)?;
    set_style(element, "transition-duration", &format!("{}ms", duration_ms))
}

fn slide_up_element(element: &Element, duration_ms: u32) -> Result<()> {
    let height = as_html_element(element)?.offset_height();
    let token = animation::begin(element);

    animation::finish_on_error(element, &token, || {
        set_style(element, "height", &format!("{}px", height))?;
        set_transition(element, duration_ms)?;
        collapse(element)
    })?;

    let target = element.clone();
    let done = token.clone();
    animation::schedule_after(duration_ms, &token, move || {
        if let Err(e) = set_style(&target, "display", "none") {
            log::warn!("⚠️ [FX] slide_up: no se pudo ocultar: {}", e);
        }
        animation::finish(&target, &done);
    });
    Ok(())
}

fn slide_down_element(element: &Element, duration_ms: u32) -> Result<()> {
    let html = as_html_element(element)?;
    let token = animation::begin(element);

    let height = animation::finish_on_error(element, &token, || {
        set_style(element, "display", "")?;
        let height = html.offset_height();
        collapse(element)?;
        Ok(height)
    })?;

    // Dejar que el layout registre la altura 0 antes de animar hacia `height`
    let target = element.clone();
    animation::schedule_after(CONFIG.slide_layout_delay_ms, &token, move || {
        let expand = || -> Result<()> {
            set_transition(&target, duration_ms)?;
            set_style(&target, "height", &format!("{}px", height))?;
            for property in BOX_PROPERTIES {
                set_style(&target, property, "")?;
            }
            Ok(())
        };
        if let Err(e) = expand() {
            log::warn!("⚠️ [FX] slide_down: no se pudo expandir: {}", e);
        }
    });

    let target = element.clone();
    let done = token.clone();
    animation::schedule_after(duration_ms, &token, move || {
        if let Err(e) = clear_slide_styles(&target) {
            log::warn!("⚠️ [FX] slide_down: no se pudo limpiar estilos: {}", e);
        }
        animation::finish(&target, &done);
    });
    Ok(())
}

fn clear_slide_styles(element: &Element) -> Result<()> {
    let style = style_of(element)?;
    for property in ["height", "transition-property", "transition-duration"] {
        style.remove_property(property).map_err(JfastError::from)?;
    }
    Ok(())
}

