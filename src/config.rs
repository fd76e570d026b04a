use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    DEFAULT_DURATION_MS, FRAME_FALLBACK_MS, SLIDE_LAYOUT_DELAY_MS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JfastConfig {
    pub default_duration_ms: u32,
    pub frame_fallback_ms: u32,
    pub slide_layout_delay_ms: u32,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for JfastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
            frame_fallback_ms: FRAME_FALLBACK_MS,
            slide_layout_delay_ms: SLIDE_LAYOUT_DELAY_MS,
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl JfastConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("JFAST_DEFAULT_DURATION_MS"),
            option_env!("JFAST_FRAME_FALLBACK_MS"),
            option_env!("JFAST_SLIDE_LAYOUT_DELAY_MS"),
            option_env!("JFAST_ENABLE_LOGGING"),
            option_env!("JFAST_LOG_LEVEL"),
        )
    }

    fn from_values(
        duration: Option<&str>,
        frame_fallback: Option<&str>,
        layout_delay: Option<&str>,
        enable_logging: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            default_duration_ms: duration
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.default_duration_ms),
            frame_fallback_ms: frame_fallback
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.frame_fallback_ms),
            slide_layout_delay_ms: layout_delay
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.slide_layout_delay_ms),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: log_level
                .map(|v| v.to_string())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Duración efectiva de una animación: la pedida o la de por defecto.
    /// Una duración de 0 se trata como "no especificada", igual que `duration || 400`.
    pub fn duration_or_default(&self, duration_ms: Option<u32>) -> u32 {
        match duration_ms {
            Some(ms) if ms > 0 => ms,
            _ => self.default_duration_ms,
        }
    }

    /// Nivel de log para wasm-logger
    pub fn level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: JfastConfig = JfastConfig::from_env();
}
