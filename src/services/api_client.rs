// ============================================================================
// API CLIENT - Variante async/await del helper de requests (gloo-net/fetch)
// ============================================================================
// Misma clasificación que `ajax`: 2xx -> Ok(ApiResponse), otro -> Err(Http).
// Sin before_send (fetch no expone el transport), sin modo síncrono.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{JfastError, Result};
use crate::services::ajax::{is_success, ResponseBody};

/// Respuesta 2xx ya leída
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Deserializar el body JSON a un tipo concreto
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.body {
            ResponseBody::Json(value) => serde_json::from_value(value.clone())
                .map_err(|e| JfastError::Serialization(e.to_string())),
            ResponseBody::Text(_) => Err(JfastError::Serialization("response is not JSON".to_string())),
        }
    }
}

/// Cliente HTTP stateless con URL base y headers comunes
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: Vec::new(),
        }
    }

    /// Header enviado en todas las requests de este cliente
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// URL completa para `path` (paths absolutos `http(s)://` se respetan)
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || self.base_url.is_empty() {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send("GET", path, None).await
    }

    /// GET + deserializar JSON
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get(path).await?.json()
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        let json = serde_json::to_string(body)
            .map_err(|e| JfastError::Serialization(e.to_string()))?;
        let builder = self
            .builder("POST", path)?
            .header("Content-Type", "application/json");
        let request = builder
            .body(json)
            .map_err(|e| JfastError::Network(format!("Request build error: {}", e)))?;
        dispatch(request).await
    }

    /// Request genérica: método, path y body opcional en texto
    pub async fn send(&self, method: &str, path: &str, body: Option<String>) -> Result<ApiResponse> {
        let builder = self.builder(method, path)?;
        let request = match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| JfastError::Network(format!("Request build error: {}", e)))?;
        dispatch(request).await
    }

    fn builder(&self, method: &str, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path);
        let builder = match method.to_ascii_uppercase().as_str() {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            "PATCH" => Request::patch(&url),
            "DELETE" => Request::delete(&url),
            other => return Err(JfastError::Dom(format!("Unsupported HTTP method: {}", other))),
        };
        Ok(self
            .headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value)))
    }
}

async fn dispatch(request: Request) -> Result<ApiResponse> {
    log::debug!("📡 [API] {} {}", request.method(), request.url());
    let response = request
        .send()
        .await
        .map_err(|e| JfastError::Network(e.to_string()))?;

    let status = response.status();
    let status_text = response.status_text();
    if !is_success(status) {
        log::debug!("❌ [API] HTTP {}: {}", status, status_text);
        return Err(JfastError::Http { status, status_text });
    }

    let text = response
        .text()
        .await
        .map_err(|e| JfastError::Network(e.to_string()))?;
    Ok(ApiResponse {
        status,
        status_text,
        body: ResponseBody::parse(&text),
    })
}
