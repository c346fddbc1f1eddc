//! Semantic Match Service Use Case
//!
//! Resolves free-text item references against the vector index. Every
//! operation is a short pipeline: canonicalize, embed, then query or upsert.
//! The service keeps no per-query state; the only thing shared between
//! calls is the settings snapshot, swapped atomically by `set_threshold`.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use sai_domain::canonicalize::normalize_to_singular;
use sai_domain::error::Result;
use sai_domain::{
    Item, ItemMetadata, MatchResult, MatchThreshold, MatchedItem, SimilarityScore, StorageBox,
    Suggestion, VectorMatch, VectorRecord,
};
use tracing::{debug, info, warn};

use crate::ports::providers::{EmbeddingProvider, VectorIndexProvider};
use crate::ports::services::{ReindexOutcome, SemanticMatchServiceInterface};
use crate::settings::MatchSettings;

/// Semantic match engine over an embedding provider and a vector index
pub struct SemanticMatchService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_index: Arc<dyn VectorIndexProvider>,
    settings: ArcSwap<MatchSettings>,
}

impl SemanticMatchService {
    /// Create a new match service with injected providers
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_index: Arc<dyn VectorIndexProvider>,
        settings: MatchSettings,
    ) -> Self {
        Self {
            embedding_provider,
            vector_index,
            settings: ArcSwap::from_pointee(settings),
        }
    }

    /// Create a match service with default settings
    pub fn with_default_settings(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_index: Arc<dyn VectorIndexProvider>,
    ) -> Self {
        Self::new(embedding_provider, vector_index, MatchSettings::default())
    }

    /// Replace every setting at once
    pub fn replace_settings(&self, settings: MatchSettings) {
        self.settings.store(Arc::new(settings));
    }

    fn current_settings(&self) -> MatchSettings {
        **self.settings.load()
    }

    /// Ranked candidates for a query; blank queries never reach the network
    async fn candidates(&self, query_text: &str, top_k: usize) -> Result<Vec<VectorMatch>> {
        if query_text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let canonical = normalize_to_singular(query_text);
        let embedding = self.embedding_provider.embed(&canonical).await?;
        let matches = self.vector_index.query(&embedding.vector, top_k.max(1)).await?;

        debug!(
            query = query_text,
            canonical = %canonical,
            candidates = matches.len(),
            "Queried vector index"
        );
        Ok(matches)
    }
}

/// Apply the confidence decision to a ranked candidate list
///
/// Ties keep the order the index returned; no secondary sort happens here.
fn decide(matches: Vec<VectorMatch>, threshold: MatchThreshold) -> MatchResult {
    let Some(best_score) = matches.first().map(|hit| hit.score) else {
        return MatchResult::empty();
    };

    if !threshold.is_met_by(best_score) {
        return MatchResult {
            best_match: None,
            best_score,
            suggestions: matches.into_iter().map(Suggestion::from).collect(),
        };
    }

    let mut ranked = matches.into_iter();
    let best_match = ranked.next().map(MatchedItem::from);
    let best_id = best_match.as_ref().map(|best| best.id.clone());
    let suggestions = ranked
        .filter(|hit| Some(&hit.id) != best_id.as_ref())
        .map(Suggestion::from)
        .collect();

    MatchResult {
        best_match,
        best_score,
        suggestions,
    }
}

fn box_name_lookup(boxes: &[StorageBox]) -> HashMap<&str, &str> {
    boxes
        .iter()
        .map(|storage_box| (storage_box.id.as_str(), storage_box.name.as_str()))
        .collect()
}

fn resolve_box_name<'a>(lookup: &HashMap<&str, &'a str>, item: &Item) -> &'a str {
    lookup.get(item.box_id.as_str()).copied().unwrap_or_default()
}

#[async_trait]
impl SemanticMatchServiceInterface for SemanticMatchService {
    async fn index_item(&self, item: &Item, box_name: &str) -> Result<()> {
        item.validate()?;

        let canonical = item.resolved_canonical_name();
        let embedding = self.embedding_provider.embed(&canonical).await?;
        let record = VectorRecord {
            id: item.id.clone(),
            values: embedding.vector,
            metadata: ItemMetadata {
                name: item.name.clone(),
                canonical_name: canonical,
                box_id: item.box_id.clone(),
                box_name: box_name.to_string(),
            },
        };
        self.vector_index.upsert(&[record]).await?;

        debug!(item_id = %item.id, box_name, "Indexed item");
        Ok(())
    }

    async fn delete_item(&self, item_id: &str) {
        if let Err(e) = self.vector_index.delete(&[item_id.to_string()]).await {
            warn!(
                item_id,
                namespace = self.vector_index.namespace(),
                error = %e,
                "Failed to delete item vector, stale entry left in index"
            );
        }
    }

    async fn find_best_match(
        &self,
        query_text: &str,
        top_k: Option<usize>,
    ) -> Result<MatchResult> {
        let settings = self.current_settings();
        let top_k = top_k.unwrap_or(settings.default_top_k).max(1);

        let matches = self.candidates(query_text, top_k).await?;
        let result = decide(matches, settings.threshold);

        debug!(
            query = query_text,
            best_score = %result.best_score,
            threshold = %settings.threshold,
            confident = result.is_confident(),
            "Best match resolved"
        );
        Ok(result)
    }

    async fn find_top_match(
        &self,
        query_text: &str,
    ) -> Result<(Option<MatchedItem>, SimilarityScore)> {
        let result = self.find_best_match(query_text, Some(1)).await?;
        Ok((result.best_match, result.best_score))
    }

    async fn find_all_above_threshold(
        &self,
        query_text: &str,
        k: Option<usize>,
        margin: f64,
    ) -> Result<Vec<MatchedItem>> {
        let settings = self.current_settings();
        let k = k.unwrap_or(settings.find_all_k).max(1);

        let matches = self.candidates(query_text, k).await?;
        Ok(matches
            .into_iter()
            .filter(|hit| settings.threshold.is_met_with_margin(hit.score, margin))
            .map(MatchedItem::from)
            .collect())
    }

    async fn top_k(&self, query_text: &str, k: usize) -> Result<Vec<VectorMatch>> {
        self.candidates(query_text, k).await
    }

    async fn reindex_all(&self, items: &[Item], boxes: &[StorageBox]) -> Result<usize> {
        let lookup = box_name_lookup(boxes);
        info!(items = items.len(), boxes = boxes.len(), "Reindexing inventory");

        for item in items {
            self.index_item(item, resolve_box_name(&lookup, item)).await?;
        }

        info!(indexed = items.len(), "Reindex complete");
        Ok(items.len())
    }

    async fn reindex_all_concurrent(
        &self,
        items: &[Item],
        boxes: &[StorageBox],
    ) -> Vec<ReindexOutcome> {
        let concurrency = self.current_settings().reindex_concurrency.max(1);
        let lookup = box_name_lookup(boxes);
        info!(
            items = items.len(),
            boxes = boxes.len(),
            concurrency,
            "Reindexing inventory concurrently"
        );

        let pending: Vec<_> = items
            .iter()
            .map(|item| self.index_item(item, resolve_box_name(&lookup, item)))
            .collect();
        let results: Vec<Result<()>> = stream::iter(pending)
            .buffered(concurrency)
            .collect()
            .await;
        let outcomes: Vec<ReindexOutcome> = items
            .iter()
            .zip(results)
            .map(|(item, result)| ReindexOutcome {
                item_id: item.id.clone(),
                result,
            })
            .collect();

        let failed = outcomes.iter().filter(|outcome| !outcome.is_ok()).count();
        if failed > 0 {
            warn!(
                indexed = outcomes.len() - failed,
                failed,
                "Reindex finished with failures"
            );
        } else {
            info!(indexed = outcomes.len(), "Reindex complete");
        }
        outcomes
    }

    fn settings(&self) -> MatchSettings {
        self.current_settings()
    }

    fn set_threshold(&self, threshold: MatchThreshold) {
        self.settings
            .rcu(|current| Arc::new(current.with_threshold(threshold)));
        info!(%threshold, "Match threshold updated");
    }
}
