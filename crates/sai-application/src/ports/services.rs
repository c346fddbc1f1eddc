//! Application Service Port Interfaces

use async_trait::async_trait;
use sai_domain::error::Result;
use sai_domain::{
    Item, MatchResult, MatchThreshold, MatchedItem, SimilarityScore, StorageBox, VectorMatch,
};

use crate::settings::MatchSettings;

// ============================================================================
// Semantic Match Service Interface
// ============================================================================

/// Semantic Match Engine Interface
///
/// Answers "which stored item does this free-text phrase refer to?".
///
/// # Failure semantics
///
/// "No confident match" is a successful [`MatchResult`] with
/// `best_match: None`. An `Err` always means the pipeline itself failed
/// (embedding or vector index), and callers must report it as such.
/// `delete_item` is the single operation that never fails.
///
/// # Concurrency
///
/// Every operation is an independent pipeline; concurrent calls do not
/// interfere. Callers that need index-then-query ordering must await the
/// index call first.
#[async_trait]
pub trait SemanticMatchServiceInterface: Send + Sync {
    /// Embed the item's canonical name and upsert it with its metadata
    async fn index_item(&self, item: &Item, box_name: &str) -> Result<()>;

    /// Best-effort removal; failures are logged and swallowed
    async fn delete_item(&self, item_id: &str);

    /// Confident match plus ranked suggestions
    ///
    /// `top_k` defaults to the configured value; 0 is treated as 1.
    async fn find_best_match(&self, query_text: &str, top_k: Option<usize>)
    -> Result<MatchResult>;

    /// The confident match alone, with the top candidate's score
    async fn find_top_match(
        &self,
        query_text: &str,
    ) -> Result<(Option<MatchedItem>, SimilarityScore)>;

    /// Every candidate scoring at least `threshold + margin`, best first
    async fn find_all_above_threshold(
        &self,
        query_text: &str,
        k: Option<usize>,
        margin: f64,
    ) -> Result<Vec<MatchedItem>>;

    /// Raw ranked candidates without any threshold applied
    async fn top_k(&self, query_text: &str, k: usize) -> Result<Vec<VectorMatch>>;

    /// Index every item sequentially, aborting on the first failure
    ///
    /// Returns the number of items indexed.
    async fn reindex_all(&self, items: &[Item], boxes: &[StorageBox]) -> Result<usize>;

    /// Index every item with bounded concurrency, collecting per-item results
    ///
    /// Outcomes come back in input order.
    async fn reindex_all_concurrent(
        &self,
        items: &[Item],
        boxes: &[StorageBox],
    ) -> Vec<ReindexOutcome>;

    /// Snapshot of the settings the next query will use
    fn settings(&self) -> MatchSettings;

    /// Change the confidence threshold for subsequent queries
    fn set_threshold(&self, threshold: MatchThreshold);
}

/// Result of reindexing one item
#[derive(Debug)]
pub struct ReindexOutcome {
    /// Id of the item this outcome belongs to
    pub item_id: String,
    /// `Ok` if the item was embedded and upserted
    pub result: Result<()>,
}

impl ReindexOutcome {
    /// Whether the item made it into the index
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
