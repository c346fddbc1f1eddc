//! In-memory vector index provider implementation
//!
//! Provides an in-memory vector index for development and testing.
//! Data is not persisted and will be lost on restart.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use sai_application::ports::registry::{
    VECTOR_INDEX_PROVIDERS, VectorIndexProviderConfig, VectorIndexProviderEntry,
};
use sai_domain::constants::DEFAULT_NAMESPACE;
use sai_domain::error::{Error, Result};
use sai_domain::ports::providers::VectorIndexProvider;
use sai_domain::value_objects::{ItemMetadata, SimilarityScore, VectorMatch, VectorRecord};

/// In-memory storage entry type
type IndexEntry = (Vec<f32>, ItemMetadata);

/// In-memory vector index provider
///
/// Stores vectors and metadata keyed by id in a concurrent hash map.
/// Scores are cosine similarity mapped into `[0, 1]`.
pub struct InMemoryVectorIndexProvider {
    namespace: String,
    entries: DashMap<String, IndexEntry>,
}

impl InMemoryVectorIndexProvider {
    /// Create a new, empty in-memory index bound to `namespace`
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: DashMap::new(),
        }
    }

    /// Number of stored vectors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryVectorIndexProvider {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

#[async_trait]
impl VectorIndexProvider for InMemoryVectorIndexProvider {
    async fn upsert(&self, records: &[VectorRecord]) -> Result<()> {
        for record in records {
            self.entries.insert(
                record.id.clone(),
                (record.values.clone(), record.metadata.clone()),
            );
        }
        Ok(())
    }

    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<VectorMatch>> {
        // Precompute query norm once
        let query_norm = compute_norm(vector);

        let mut hits = Vec::with_capacity(self.entries.len());
        for entry in self.entries.iter() {
            let (values, metadata) = entry.value();
            if values.len() != vector.len() {
                return Err(Error::vector_index(format!(
                    "Dimension mismatch for '{}': stored {} values, query has {}",
                    entry.key(),
                    values.len(),
                    vector.len()
                )));
            }
            hits.push(VectorMatch {
                id: entry.key().clone(),
                score: SimilarityScore::new(f64::from(cosine_similarity_with_norm(
                    vector, values, query_norm,
                ))),
                metadata: metadata.clone(),
            });
        }

        // Map iteration order is arbitrary; ties break on id
        hits.sort_by(|a, b| {
            b.score
                .value()
                .partial_cmp(&a.score.value())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });
        hits.truncate(top_k);
        Ok(hits)
    }

    async fn delete(&self, ids: &[String]) -> Result<()> {
        for id in ids {
            self.entries.remove(id);
        }
        Ok(())
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

/// Compute the L2 norm of a vector
fn compute_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity with precomputed query norm; `a` and `b` have equal length
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f32) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b = compute_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        // Normalize to [0, 1] range
        (dot_product / (norm_a * norm_b) + 1.0) / 2.0
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating in-memory vector index provider instances.
fn in_memory_vector_index_factory(
    config: &VectorIndexProviderConfig,
) -> std::result::Result<Arc<dyn VectorIndexProvider>, String> {
    let namespace = config.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE);
    Ok(Arc::new(InMemoryVectorIndexProvider::new(namespace)))
}

#[linkme::distributed_slice(VECTOR_INDEX_PROVIDERS)]
static MEMORY_PROVIDER: VectorIndexProviderEntry = VectorIndexProviderEntry {
    name: "memory",
    description: "In-memory vector index (cosine similarity, non-persistent)",
    factory: in_memory_vector_index_factory,
};
