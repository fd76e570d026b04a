// ============================================================================
// AJAX - Helper de requests sobre XMLHttpRequest con callbacks
// ============================================================================
// Ciclo de vida:
//   open -> headers -> before_send(&xhr) -> send -> (loadend) ->
//     status 2xx: success(body, status, &xhr)
//     otro:       error(&xhr, status, status_text)
// El body de éxito se intenta parsear como JSON; si no, se entrega como texto.
// Sin reintentos, sin timeout, sin cancelación. Callbacks ausentes = no-op.
// ============================================================================

use std::fmt;

use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::XmlHttpRequest;

use crate::error::{JfastError, Result};
use crate::utils::constants::DEFAULT_HTTP_METHOD;

type BeforeSendCallback = Box<dyn FnOnce(&XmlHttpRequest)>;
type SuccessCallback = Box<dyn FnOnce(ResponseBody, u16, &XmlHttpRequest)>;
type ErrorCallback = Box<dyn FnOnce(&XmlHttpRequest, u16, String)>;

/// Body de una respuesta exitosa: JSON parseado o texto tal cual
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Parsear como JSON con fallback a texto (con warning)
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => ResponseBody::Json(value),
            Err(e) => {
                log::warn!("⚠️ [AJAX] Response is not JSON ({}): {}", e, text);
                ResponseBody::Text(text.to_string())
            }
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) => Some(text),
            ResponseBody::Json(_) => None,
        }
    }
}

/// Status HTTP en [200, 300)
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Configuración de una request (se consume en `ajax`)
pub struct AjaxOptions {
    method: String,
    url: String,
    is_async: bool,
    headers: Vec<(String, String)>,
    data: Option<String>,
    before_send: Option<BeforeSendCallback>,
    success: Option<SuccessCallback>,
    error: Option<ErrorCallback>,
}

impl AjaxOptions {
    /// GET asíncrono a `url`, sin headers ni body
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            method: DEFAULT_HTTP_METHOD.to_string(),
            url: url.into(),
            is_async: true,
            headers: Vec::new(),
            data: None,
            before_send: None,
            success: None,
            error: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// `false` = XHR síncrono: los callbacks se ejecutan dentro de `ajax()`
    pub fn set_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// Los headers se envían en el orden en que se agregan
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn data(mut self, body: impl Into<String>) -> Self {
        self.data = Some(body.into());
        self
    }

    /// Body JSON + header Content-Type
    pub fn json<T: serde::Serialize>(self, body: &T) -> Result<Self> {
        let json = serde_json::to_string(body)
            .map_err(|e| JfastError::Serialization(e.to_string()))?;
        Ok(self.header("Content-Type", "application/json").data(json))
    }

    pub fn before_send<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&XmlHttpRequest) + 'static,
    {
        self.before_send = Some(Box::new(callback));
        self
    }

    pub fn success<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(ResponseBody, u16, &XmlHttpRequest) + 'static,
    {
        self.success = Some(Box::new(callback));
        self
    }

    pub fn error<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&XmlHttpRequest, u16, String) + 'static,
    {
        self.error = Some(Box::new(callback));
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn http_method(&self) -> &str {
        &self.method
    }

    pub fn is_async(&self) -> bool {
        self.is_async
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

impl fmt::Debug for AjaxOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AjaxOptions")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("async", &self.is_async)
            .field("headers", &self.headers)
            .field("data", &self.data)
            .field("before_send", &self.before_send.is_some())
            .field("success", &self.success.is_some())
            .field("error", &self.error.is_some())
            .finish()
    }
}

struct Callbacks {
    success: Option<SuccessCallback>,
    error: Option<ErrorCallback>,
}

/// Lanzar la request. `Err` solo si el navegador rechaza construirla/abrirla;
/// los status no-2xx (y los fallos de red, status 0) van al callback `error`.
pub fn ajax(options: AjaxOptions) -> Result<()> {
    let AjaxOptions {
        method,
        url,
        is_async,
        headers,
        data,
        before_send,
        success,
        error,
    } = options;

    let xhr = XmlHttpRequest::new()?;
    xhr.open_with_async(&method, &url, is_async)?;

    for (name, value) in &headers {
        xhr.set_request_header(name, value)?;
    }

    if let Some(callback) = before_send {
        callback(&xhr);
    }

    let callbacks = Callbacks { success, error };
    log::debug!("📡 [AJAX] {} {} (async: {})", method, url, is_async);

    if is_async {
        let handle = xhr.clone();
        let on_loadend = Closure::once_into_js(move || complete(&handle, callbacks));
        xhr.add_event_listener_with_callback("loadend", on_loadend.unchecked_ref())?;
        xhr.send_with_opt_str(data.as_deref())?;
    } else {
        // En modo síncrono un fallo de red lanza NetworkError desde send();
        // se reporta por el callback igual que en modo asíncrono (status 0).
        if let Err(e) = xhr.send_with_opt_str(data.as_deref()) {
            log::warn!("⚠️ [AJAX] {} {} falló: {:?}", method, url, e);
        }
        complete(&xhr, callbacks);
    }
    Ok(())
}

fn complete(xhr: &XmlHttpRequest, callbacks: Callbacks) {
    let status = xhr.status().unwrap_or(0);

    if is_success(status) {
        let text = xhr.response_text().ok().flatten().unwrap_or_default();
        let body = ResponseBody::parse(&text);
        log::debug!("✅ [AJAX] HTTP {}", status);
        if let Some(callback) = callbacks.success {
            callback(body, status, xhr);
        }
    } else {
        let status_text = xhr.status_text().unwrap_or_default();
        log::debug!("❌ [AJAX] HTTP {}: {}", status, status_text);
        if let Some(callback) = callbacks.error {
            callback(xhr, status, status_text);
        }
    }
}
