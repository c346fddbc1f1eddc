//! Domain Port Interfaces
//!
//! Boundary contracts the application layer depends on and the provider
//! crate implements.

/// External service provider ports
pub mod providers;

pub use providers::{EmbeddingProvider, VectorIndexProvider};
