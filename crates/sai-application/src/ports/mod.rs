//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **providers** - Re-export of the domain provider ports
//! - **registry/** - Auto-registration system for plugin providers
//! - **services.rs** - Application service interfaces (semantic match)

/// External service provider ports
pub mod providers {
    pub use sai_domain::ports::providers::*;
}
/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use providers::{EmbeddingProvider, VectorIndexProvider};
pub use registry::{
    EmbeddingProviderConfig, EmbeddingProviderEntry, VectorIndexProviderConfig,
    VectorIndexProviderEntry, list_embedding_providers, list_vector_index_providers,
    resolve_embedding_provider, resolve_vector_index_provider,
};
pub use services::{ReindexOutcome, SemanticMatchServiceInterface};
