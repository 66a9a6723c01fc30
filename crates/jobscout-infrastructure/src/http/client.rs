//! Shared reqwest plumbing for the backend gateways.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use jobscout_core::config::HttpConfig;
use jobscout_core::session::GatewayError;

use crate::dto::wire::error_detail;

/// Builds the client used by every gateway.
pub fn build_client(config: &HttpConfig) -> Result<Client, GatewayError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| GatewayError::Transport(format!("Failed to build HTTP client: {}", e)))
}

/// Joins a base URL and an absolute path.
pub(crate) fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Value for the `Authorization` header.
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub(crate) fn transport_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

/// Passes success responses through. Others become
/// [`GatewayError::Rejected`] carrying the body's `detail`, or `fallback`.
pub(crate) async fn ensure_success(
    response: Response,
    fallback: &str,
) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = rejection_message(&body, fallback);
    tracing::debug!("Backend rejected request ({}): {}", status, message);
    Err(GatewayError::rejected(status.as_u16(), message))
}

/// Checks the status and decodes the JSON body.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, GatewayError> {
    let response = ensure_success(response, fallback).await?;
    let body = response.text().await.map_err(transport_error)?;
    decode_body(&body)
}

pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
    serde_json::from_str(body)
        .map_err(|e| GatewayError::Decode(format!("Unexpected response body: {}", e)))
}

pub(crate) fn rejection_message(body: &str, fallback: &str) -> String {
    error_detail(body).unwrap_or_else(|| fallback.to_string())
}
