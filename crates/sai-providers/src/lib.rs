//! # StorageAI - Provider Implementations
//!
//! Adapters implementing the domain provider ports. Each provider registers
//! itself into the application-layer registry, so linking this crate is
//! enough to make it selectable from configuration.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI, Null |
//! | Vector Index | `VectorIndexProvider` | Pinecone, InMemory |
//!
//! ## Usage
//!
//! ```ignore
//! use sai_providers::embedding::OpenAIEmbeddingProvider;
//! use sai_providers::vector_index::PineconeVectorIndexProvider;
//! ```

// Re-export sai-domain types commonly used with providers
pub use sai_domain::error::{Error, Result};
pub use sai_domain::ports::providers::{EmbeddingProvider, VectorIndexProvider};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// Embedding provider implementations
pub mod embedding;

/// Vector index provider implementations
pub mod vector_index;
