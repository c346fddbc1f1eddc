//! Semantic Embedding Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Produced only by an `EmbeddingProvider`; never built or mutated by hand
/// outside tests. The core never persists it, ownership of durable storage
/// belongs to the vector index.
///
/// ## Example
///
/// ```rust
/// use sai_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     vector: vec![0.1, 0.2, 0.3],
///     model: "text-embedding-3-small".to_string(),
///     dimensions: 3,
/// };
/// assert_eq!(embedding.vector.len(), embedding.dimensions);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}
