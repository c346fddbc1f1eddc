//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`EmbeddingProvider`] | Text embedding generation services |
//! | [`VectorIndexProvider`] | Namespaced vector upsert/query/delete |

/// Embedding provider port
pub mod embedding;
/// Vector index provider port
pub mod vector_index;

pub use embedding::EmbeddingProvider;
pub use vector_index::VectorIndexProvider;
