//! OpenAI Embedding Provider
//!
//! Implements the EmbeddingProvider port using OpenAI's embedding API.
//! Supports text-embedding-3-small, text-embedding-3-large, and ada-002.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sai_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use sai_domain::error::{Error, Result};
use sai_domain::ports::providers::EmbeddingProvider;
use sai_domain::value_objects::Embedding;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_DEFAULT, OPENAI_DEFAULT_BASE_URL, OPENAI_DEFAULT_MODEL,
    OPENAI_MODELS_WITH_DIMENSIONS,
};
use crate::embedding::helpers::{DEFAULT_EMBEDDING_TIMEOUT, constructor, fit_to_dimensions};
use crate::utils::{FailureKind, HttpResponseUtils};

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<usize>,
    encoding_format: &'static str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Deserialize)]
struct EmbeddingDatum {
    index: usize,
    embedding: Vec<f32>,
}

/// OpenAI embedding provider
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use sai_providers::embedding::OpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let provider = OpenAIEmbeddingProvider::new(
///     "sk-your-api-key".to_string(),
///     None,
///     "text-embedding-3-small".to_string(),
///     512,
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// ```
pub struct OpenAIEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Create a new OpenAI embedding provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to OpenAI API)
    /// * `model` - Model name (e.g., "text-embedding-3-small")
    /// * `dimensions` - Length of every returned vector
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        dimensions: usize,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let api_key = constructor::validate_api_key(&api_key);
        let base_url = constructor::validate_url(base_url);

        Self {
            api_key,
            base_url,
            model,
            dimensions,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_DEFAULT_BASE_URL)
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send embedding request and decode the response body
    async fn fetch_embeddings(&self, texts: &[String]) -> Result<EmbeddingResponse> {
        let payload = EmbeddingRequest {
            model: &self.model,
            input: texts,
            dimensions: OPENAI_MODELS_WITH_DIMENSIONS
                .contains(&self.model.as_str())
                .then_some(self.dimensions),
            encoding_format: "float",
        };

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url()))
            .bearer_auth(&self.api_key)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error("OpenAI", self.timeout, e))?;

        HttpResponseUtils::check_and_parse(response, "OpenAI", FailureKind::Embedding).await
    }

    /// Place every datum at its `index`, fitting it to the configured size
    fn order_by_index(&self, data: Vec<EmbeddingDatum>, expected: usize) -> Result<Vec<Embedding>> {
        if data.len() != expected {
            return Err(Error::embedding(format!(
                "Response data count mismatch: expected {expected}, got {}",
                data.len()
            )));
        }

        let mut slots: Vec<Option<Vec<f32>>> = vec![None; expected];
        for datum in data {
            let Some(slot) = slots.get_mut(datum.index) else {
                return Err(Error::embedding(format!(
                    "Embedding index {} out of range for {expected} inputs",
                    datum.index
                )));
            };
            if slot.is_some() {
                return Err(Error::embedding(format!(
                    "Duplicate embedding index {} in response",
                    datum.index
                )));
            }
            *slot = Some(datum.embedding);
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                let vector =
                    slot.ok_or_else(|| Error::embedding(format!("Missing embedding for text {i}")))?;
                Ok(Embedding {
                    vector: fit_to_dimensions(vector, self.dimensions),
                    model: self.model.clone(),
                    dimensions: self.dimensions,
                })
            })
            .collect()
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Err(Error::invalid_argument(
                "embed_batch requires at least one text",
            ));
        }

        let response = self.fetch_embeddings(texts).await?;
        debug!(
            model = %self.model,
            inputs = texts.len(),
            returned = response.data.len(),
            "OpenAI embeddings received"
        );
        self.order_by_index(response.data, texts.len())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn openai_embedding_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let api_key = config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| "OpenAI requires api_key".to_string())?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string());
    let dimensions = config.dimensions.unwrap_or(EMBEDDING_DIMENSION_DEFAULT);
    let timeout = config
        .timeout_secs
        .map_or(DEFAULT_EMBEDDING_TIMEOUT, Duration::from_secs);
    let http_client = HttpResponseUtils::client(timeout)?;

    Ok(Arc::new(OpenAIEmbeddingProvider::new(
        api_key,
        config.base_url.clone(),
        model,
        dimensions,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OPENAI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "openai",
    description: "OpenAI embedding provider (text-embedding-3-small/large, ada-002)",
    factory: openai_embedding_factory,
};
