//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use std::time::Duration;

use reqwest::{Client, Response};
use sai_domain::error::{Error, Result};
use serde::de::DeserializeOwned;

use crate::constants::ERROR_MSG_REQUEST_TIMEOUT;

/// Which error a non-success status maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Embedding request: `Error::EmbeddingService`
    Embedding,
    /// Vector upsert or delete: `Error::IndexWrite`
    IndexWrite,
    /// Vector query: `Error::IndexQuery`
    IndexQuery,
}

impl FailureKind {
    fn status_error(self, status: u16, body: String) -> Error {
        match self {
            Self::Embedding => Error::embedding_service(status, body),
            Self::IndexWrite => Error::index_write(status, body),
            Self::IndexQuery => Error::index_query(status, body),
        }
    }

    fn malformed(self, provider_name: &str, details: &str) -> Error {
        let message = format!("{provider_name} response parse failed: {details}");
        match self {
            Self::Embedding => Error::embedding(message),
            Self::IndexWrite | Self::IndexQuery => Error::vector_index(message),
        }
    }
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Build the shared reqwest client used by an HTTP provider
    pub fn client(timeout: Duration) -> std::result::Result<Client, String> {
        Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {e}"))
    }

    /// Map a transport failure (no HTTP status) to `Error::Network`
    pub fn transport_error(provider_name: &str, timeout: Duration, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::network_with_source(
                format!("{provider_name} {ERROR_MSG_REQUEST_TIMEOUT} {timeout:?}"),
                error,
            )
        } else {
            Error::network_with_source(format!("{provider_name} HTTP request failed"), error)
        }
    }

    /// Fail with the status error for `kind` unless the response is a success
    ///
    /// The raw body is carried in the error unchanged.
    pub async fn check_status(response: Response, kind: FailureKind) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(kind.status_error(status.as_u16(), body))
    }

    /// Check response status and parse JSON
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
        kind: FailureKind,
    ) -> Result<T> {
        let response = Self::check_status(response, kind).await?;
        let body = response
            .text()
            .await
            .map_err(|e| kind.malformed(provider_name, &e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| kind.malformed(provider_name, &e.to_string()))
    }
}
