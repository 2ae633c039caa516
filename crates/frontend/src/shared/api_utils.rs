//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use contracts::shared::api_response::{ApiErrorBody, DataResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Compile-time override of the backend address, e.g.
/// `PURCHASE_API_BASE=https://erp.example.com trunk build`
const API_BASE_OVERRIDE: Option<&str> = option_env!("PURCHASE_API_BASE");

const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Uses `PURCHASE_API_BASE` when it was set at build time. Otherwise the URL
/// is constructed from the current window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Message for a non-2xx response: the backend's `message` field if present,
/// otherwise the HTTP status.
pub async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(ApiErrorBody {
            message: Some(message),
        }) if !message.trim().is_empty() => message,
        _ => format!("HTTP {}", status),
    }
}

/// GET a reference list wrapped in `{ "data": [...] }`
pub async fn fetch_data<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<DataResponse<T>>()
        .await
        .map(|body| body.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
