//! Match engine settings
//!
//! Supplied by the hosting application's configuration and handed to the
//! engine at construction. Nothing here reads the environment.

use sai_domain::MatchThreshold;
use sai_domain::constants::{
    DEFAULT_FIND_ALL_K, DEFAULT_REINDEX_CONCURRENCY, DEFAULT_TOP_K,
};

/// Tunables for [`crate::use_cases::SemanticMatchService`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchSettings {
    /// Minimum score for a confident match
    pub threshold: MatchThreshold,
    /// Candidates requested by `find_best_match` when the caller passes none
    pub default_top_k: usize,
    /// Candidates requested by `find_all_above_threshold` when the caller passes none
    pub find_all_k: usize,
    /// In-flight items for `reindex_all_concurrent`
    pub reindex_concurrency: usize,
}

impl MatchSettings {
    /// Replace the threshold
    pub fn with_threshold(mut self, threshold: MatchThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace the default top-k
    pub fn with_default_top_k(mut self, top_k: usize) -> Self {
        self.default_top_k = top_k;
        self
    }

    /// Replace the find-all k
    pub fn with_find_all_k(mut self, k: usize) -> Self {
        self.find_all_k = k;
        self
    }

    /// Replace the reindex concurrency
    pub fn with_reindex_concurrency(mut self, concurrency: usize) -> Self {
        self.reindex_concurrency = concurrency;
        self
    }
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            threshold: MatchThreshold::default(),
            default_top_k: DEFAULT_TOP_K,
            find_all_k: DEFAULT_FIND_ALL_K,
            reindex_concurrency: DEFAULT_REINDEX_CONCURRENCY,
        }
    }
}
