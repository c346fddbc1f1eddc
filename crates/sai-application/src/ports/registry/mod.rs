//! Provider Registry System
//!
//! Uses the `linkme` crate for compile-time registration of providers
//! that are discovered and instantiated at runtime from configuration.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = pinecone" → PineconeProvider │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in sai-providers)
//!
//! ```ignore
//! use sai_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static OPENAI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "openai",
//!     description: "OpenAI embeddings API",
//!     factory: |config| Ok(Arc::new(OpenAIEmbeddingProvider::from_config(config)?)),
//! };
//! ```
//!
//! ### Resolving a Provider (in sai-infrastructure)
//!
//! ```ignore
//! use sai_application::ports::registry::resolve_vector_index_provider;
//!
//! let config = VectorIndexProviderConfig::new("memory").with_namespace("inventory");
//! let index = resolve_vector_index_provider(&config)?;
//! ```

pub mod embedding;
pub mod vector_index;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry, list_embedding_providers,
    resolve_embedding_provider,
};
pub use vector_index::{
    VECTOR_INDEX_PROVIDERS, VectorIndexProviderConfig, VectorIndexProviderEntry,
    list_vector_index_providers, resolve_vector_index_provider,
};
