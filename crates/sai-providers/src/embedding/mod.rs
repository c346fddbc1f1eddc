//! Embedding Provider Implementations
//!
//! Converts canonical item names into dense vectors.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingProvider | Testing | Complete |
//! | OpenAIEmbeddingProvider | Cloud | Complete |

pub mod helpers;
pub mod null;
pub mod openai;

// Re-export for convenience
pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
pub use openai::OpenAIEmbeddingProvider;
