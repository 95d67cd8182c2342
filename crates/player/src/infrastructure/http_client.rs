//! HTTP adapter for `RawApiPort`
//!
//! reqwest on desktop, gloo-net in the browser. Both sides read the body as
//! text first so empty answers (204, bare 200) decode to `Value::Null`.

use serde_json::Value;

use crate::ports::outbound::{ApiError, RawApiPort};

/// JSON over HTTP against a fixed base URL
#[derive(Clone)]
pub struct HttpApiAdapter {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpApiAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Turn a status code and body into the JSON payload or an `ApiError`.
fn decode(status: u16, body: String) -> Result<Value, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status { code: status, body });
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

fn not_found_as_none(result: Result<Value, ApiError>) -> Result<Option<Value>, ApiError> {
    match result {
        Ok(Value::Null) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpApiAdapter {
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(status, body)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl RawApiPort for HttpApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        not_found_as_none(self.get_json(path).await)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(self.client.put(self.url(path)).json(body)).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(path))).await.map(|_| ())
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use gloo_net::http::{Request, RequestBuilder};
    use serde_json::Value;

    use super::decode;
    use crate::ports::outbound::ApiError;

    pub(super) async fn send(request: Request) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(status, body)
    }

    pub(super) fn with_json(builder: RequestBuilder, body: &Value) -> Result<Request, ApiError> {
        builder
            .json(body)
            .map_err(|e| ApiError::Serialize(e.to_string()))
    }

    pub(super) fn without_body(builder: RequestBuilder) -> Result<Request, ApiError> {
        builder
            .build()
            .map_err(|e| ApiError::Serialize(e.to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl RawApiPort for HttpApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let request = web::without_body(gloo_net::http::Request::get(&self.url(path)))?;
        web::send(request).await
    }

    async fn get_optional_json(&self, path: &str) -> Result<Option<Value>, ApiError> {
        not_found_as_none(self.get_json(path).await)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = web::with_json(gloo_net::http::Request::post(&self.url(path)), body)?;
        web::send(request).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let request = web::with_json(gloo_net::http::Request::put(&self.url(path)), body)?;
        web::send(request).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = web::without_body(gloo_net::http::Request::delete(&self.url(path)))?;
        web::send(request).await.map(|_| ())
    }
}
