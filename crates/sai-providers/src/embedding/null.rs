//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use std::sync::Arc;

use async_trait::async_trait;
use sai_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use sai_domain::error::Result;
use sai_domain::ports::providers::EmbeddingProvider;
use sai_domain::value_objects::Embedding;

use crate::constants::{EMBEDDING_DIMENSION_DEFAULT, NULL_EMBEDDING_MODEL};

/// Null embedding provider for testing
///
/// The same text always produces the same vector, independent of its
/// position in the batch, so indexing and querying line up offline.
///
/// # Example
///
/// ```rust
/// use sai_providers::embedding::NullEmbeddingProvider;
/// use sai_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new(64);
/// assert_eq!(provider.dimensions(), 64);
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        // FNV-1a
        let seed = text.bytes().fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        });

        (0..self.dimensions)
            .map(|j| {
                let mixed = seed.rotate_left((j % 64) as u32) ^ (j as u64).wrapping_mul(0x9e37_79b9);
                ((mixed % 2000) as f32 / 1000.0) - 1.0
            })
            .collect()
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new(EMBEDDING_DIMENSION_DEFAULT)
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding {
                vector: self.vector_for(text),
                model: NULL_EMBEDDING_MODEL.to_string(),
                dimensions: self.dimensions,
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn null_embedding_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let dimensions = config.dimensions.unwrap_or(EMBEDDING_DIMENSION_DEFAULT);
    if dimensions == 0 {
        return Err("Null embedding provider requires dimensions > 0".to_string());
    }
    Ok(Arc::new(NullEmbeddingProvider::new(dimensions)))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static NULL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "null",
    description: "Null provider for testing (deterministic hash-based embeddings)",
    factory: null_embedding_factory,
};
