use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{VectorMatch, VectorRecord};

/// Namespaced Vector Index Interface
///
/// Each instance is bound to a single logical namespace.
///
/// # Contract
///
/// - `upsert` is idempotent: the same id again replaces vector and metadata.
///   Failures surface as `Error::IndexWrite`.
/// - `query` returns at most `top_k` hits ranked by descending score, ties
///   in whatever order the backend produced them. Failures surface as
///   `Error::IndexQuery`.
/// - `delete` of an unknown id is a no-op. Callers treat delete failures as
///   non-fatal.
#[async_trait]
pub trait VectorIndexProvider: Send + Sync {
    /// Insert or replace records
    async fn upsert(&self, records: &[VectorRecord]) -> Result<()>;

    /// Nearest neighbours of `vector`, best first
    async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<VectorMatch>>;

    /// Remove records by id
    async fn delete(&self, ids: &[String]) -> Result<()>;

    /// Namespace this instance reads and writes
    fn namespace(&self) -> &str;

    /// Provider identifier (e.g., "pinecone", "memory")
    fn provider_name(&self) -> &str;
}
