//! Engine bootstrap
//!
//! Turns an [`AppConfig`] into a ready [`SemanticMatchService`]:
//!
//! ```text
//! AppConfig → registry configs → linkme registry → Arc<dyn Provider> → engine
//! ```
//!
//! Providers are looked up by name in the registries `sai-providers` fills
//! in, so this crate never names a concrete provider type.

use std::sync::Arc;

use sai_application::SemanticMatchService;
use sai_application::ports::providers::{EmbeddingProvider, VectorIndexProvider};
use sai_application::ports::registry::{resolve_embedding_provider, resolve_vector_index_provider};
use sai_domain::error::{Error, Result};
use tracing::{info, warn};

use crate::config::AppConfig;

/// Resolve the configured embedding provider
pub fn resolve_embedding(config: &AppConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    let provider = resolve_embedding_provider(&config.embedding.registry_config())
        .map_err(Error::config)?;

    if provider.dimensions() != config.embedding.dimensions {
        warn!(
            configured = config.embedding.dimensions,
            actual = provider.dimensions(),
            "Embedding provider reports a different dimensionality than configured"
        );
    }
    Ok(provider)
}

/// Resolve the configured vector index provider
pub fn resolve_vector_index(config: &AppConfig) -> Result<Arc<dyn VectorIndexProvider>> {
    resolve_vector_index_provider(&config.vector_index.registry_config()).map_err(Error::config)
}

/// Build the semantic match engine from configuration
pub fn build_match_service(config: &AppConfig) -> Result<SemanticMatchService> {
    let embedding = resolve_embedding(config)?;
    let vector_index = resolve_vector_index(config)?;
    let settings = config.matching.match_settings()?;

    info!(
        embedding = embedding.provider_name(),
        vector_index = vector_index.provider_name(),
        namespace = vector_index.namespace(),
        threshold = settings.threshold.value(),
        "Semantic match engine ready"
    );

    Ok(SemanticMatchService::new(embedding, vector_index, settings))
}
