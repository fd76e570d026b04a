/// Duración por defecto de fade/slide (ms), igual que `duration || 400`
pub const DEFAULT_DURATION_MS: u32 = 400;

/// Intervalo del timer de respaldo cuando no hay requestAnimationFrame (~60fps)
pub const FRAME_FALLBACK_MS: u32 = 16;

/// Retardo para que el layout registre los valores iniciales antes de slideDown
pub const SLIDE_LAYOUT_DELAY_MS: u32 = 16;

/// Propiedades animadas por la transición de slide
pub const SLIDE_TRANSITION_PROPERTY: &str = "height, margin, padding";

/// Método HTTP por defecto del helper de requests
pub const DEFAULT_HTTP_METHOD: &str = "GET";
