//! Domain Value Objects
//!
//! Immutable values without identity, compared by their attributes.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of a canonical name |
//! | [`SimilarityScore`] | Similarity reported by the vector index |
//! | [`MatchThreshold`] | Minimum score for a confident match |
//! | [`ItemMetadata`] | Metadata stored verbatim next to each vector |
//! | [`VectorRecord`] | One upsert entry |
//! | [`VectorMatch`] | One ranked query hit |
//! | [`MatchResult`] | Confident match and/or ranked suggestions |

/// Semantic embedding value objects
pub mod embedding;
/// Match result value objects
pub mod matching;
/// Similarity score and threshold newtypes
pub mod score;
/// Vector index record value objects
pub mod vector;

pub use embedding::Embedding;
pub use matching::{MatchResult, MatchedItem, Suggestion};
pub use score::{MatchThreshold, SimilarityScore};
pub use vector::{ItemMetadata, VectorMatch, VectorRecord};
