//! # StorageAI Domain Layer
//!
//! Core business types for semantic inventory matching. This crate has no
//! knowledge of HTTP, configuration files or logging backends; it only
//! defines what an inventory item is, how item names are canonicalized,
//! what a match result looks like, and the ports the application layer
//! needs to embed text and query a vector index.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`canonicalize`] | Pure name normalization (lowercase, singular, whitespace-collapsed) |
//! | [`entities`] | `Item` and `StorageBox` |
//! | [`value_objects`] | Embeddings, scores, thresholds, metadata and match results |
//! | [`ports`] | `EmbeddingProvider` and `VectorIndexProvider` contracts |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Domain defaults (threshold, top-k, namespace) |

pub mod canonicalize;
pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{Item, StorageBox};
pub use error::{Error, Result};
pub use value_objects::{
    Embedding, ItemMetadata, MatchResult, MatchThreshold, MatchedItem, SimilarityScore,
    Suggestion, VectorMatch, VectorRecord,
};
