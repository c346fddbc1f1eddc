//! Vector Index Provider Implementations
//!
//! Namespaced nearest-neighbour storage for item vectors.
//!
//! ## Available Providers
//!
//! | Provider | Description | Persistence |
//! |----------|-------------|-------------|
//! | [`PineconeVectorIndexProvider`] | Pinecone data plane over HTTP | Remote |
//! | [`InMemoryVectorIndexProvider`] | Cosine similarity over a concurrent map | None |

pub mod in_memory;
pub mod pinecone;

pub use in_memory::InMemoryVectorIndexProvider;
pub use pinecone::PineconeVectorIndexProvider;
