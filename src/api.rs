//! API Client
//!
//! Thin wrappers over the browser fetch API for the backend REST endpoints.
//! No retry, caching, or protocol logic; every call is one request and one
//! parsed JSON response.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::assets::RawAsset;
use crate::models::{AssetSummary, Credential, FormSchema, ListPayload, ServiceDescriptor};

/// What can go wrong on a round-trip to the backend.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (fetch rejected, no window, bad request).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response; carries the backend's message when it sent one.
    #[error("{0}")]
    Api(String),
    /// 2xx response whose body did not parse as the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| js_sys::Reflect::get(&value, &"message".into()).ok()?.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Network(message)
    }
}

/// Error payload the backend sends on failed requests.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

// ========================
// Fetch Plumbing
// ========================

async fn fetch_response(
    method: &str,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(json) = body {
        opts.set_body(&JsValue::from_str(&json.to_string()));
    }

    let request = Request::new_with_str_and_init(path, &opts)?;
    request.headers().set("Accept", "application/json")?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch returned a non-response".into()))?;

    if response.ok() {
        Ok(response)
    } else {
        Err(error_from_response(&response).await)
    }
}

/// Prefer the backend's `{ "error": "..." }` message; fall back to the status.
async fn error_from_response(response: &Response) -> ApiError {
    let status = format!("request failed with status {}", response.status());
    let Ok(text_promise) = response.text() else {
        return ApiError::Api(status);
    };
    match JsFuture::from(text_promise).await {
        Ok(text) => {
            let text = text.as_string().unwrap_or_default();
            match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) if !body.error.is_empty() => ApiError::Api(body.error),
                _ => ApiError::Api(status),
            }
        }
        Err(_) => ApiError::Api(status),
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let value = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode_json(fetch_response("GET", path, None).await?).await
}

pub async fn post(path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
    fetch_response("POST", path, Some(body)).await?;
    Ok(())
}

pub async fn put(path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
    fetch_response("PUT", path, Some(body)).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    fetch_response("DELETE", path, None).await?;
    Ok(())
}

// ========================
// Credentials
// ========================

#[derive(Deserialize)]
struct CredentialsResponse {
    credentials: Vec<Credential>,
}

#[derive(Deserialize)]
struct ServicesResponse {
    services: Vec<ServiceDescriptor>,
}

pub async fn list_credentials() -> Result<Vec<Credential>, ApiError> {
    let response: CredentialsResponse = get("/api/v1/credentials").await?;
    Ok(response.credentials)
}

pub async fn list_services() -> Result<Vec<ServiceDescriptor>, ApiError> {
    let response: ServicesResponse = get("/api/v1/credentials/services").await?;
    Ok(response.services)
}

pub async fn delete_credential(service_type: &str) -> Result<(), ApiError> {
    delete(&format!("/api/v1/credentials/{}", service_type)).await
}

/// Ask the backend to exercise the stored credential against the service.
/// Correctness checking is entirely backend-side.
pub async fn test_credential(service_type: &str) -> Result<(), ApiError> {
    post(
        &format!("/api/v1/credentials/{}/test", service_type),
        &serde_json::Value::Object(serde_json::Map::new()),
    )
    .await
}

// ========================
// Other Assets
// ========================

pub mod other_assets {
    use super::*;

    const BASE: &str = "/api/v1/other-assets";

    #[derive(Deserialize)]
    struct AssetsResponse {
        assets: Vec<RawAsset>,
        #[serde(default)]
        summary: Option<AssetSummary>,
    }

    pub async fn fetch_all() -> Result<ListPayload<RawAsset>, ApiError> {
        let response: AssetsResponse = get(BASE).await?;
        Ok(ListPayload {
            items: response.assets,
            summary: response.summary,
        })
    }

    pub async fn create(fields: serde_json::Map<String, serde_json::Value>) -> Result<(), ApiError> {
        post(BASE, &serde_json::Value::Object(fields)).await
    }

    pub async fn update(
        id: u32,
        fields: serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), ApiError> {
        put(&format!("{}/{}", BASE, id), &serde_json::Value::Object(fields)).await
    }

    pub async fn remove(id: u32) -> Result<(), ApiError> {
        delete(&format!("{}/{}", BASE, id)).await
    }

    pub async fn fetch_schema() -> Result<FormSchema, ApiError> {
        get(&format!("{}/schema", BASE)).await
    }
}
