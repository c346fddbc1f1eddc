use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text Embedding Interface
///
/// Turns canonical item names into fixed-dimension vectors.
///
/// # Ordering
///
/// `embed_batch` returns exactly one embedding per input, in input order.
/// Providers whose remote API may answer out of order must re-sort before
/// returning; that detail never leaks past this trait.
///
/// # Side effects
///
/// One outbound call per `embed_batch` invocation regardless of batch size,
/// no caching and no retries.
///
/// # Example
///
/// ```ignore
/// use sai_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("aa battery").await?;
/// assert_eq!(embedding.vector.len(), provider.dimensions());
///
/// let texts = vec!["scissor".into(), "9v battery".into()];
/// let embeddings = provider.embed_batch(&texts).await?;
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts, preserving input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of every embedding this provider returns
    fn dimensions(&self) -> usize;

    /// Provider identifier (e.g., "openai", "null")
    fn provider_name(&self) -> &str;
}
