//! Match Result Value Objects
//!
//! Output shapes of the semantic match engine.

use serde::{Deserialize, Serialize};

use crate::value_objects::{SimilarityScore, VectorMatch};

/// Value Object: Matched Item
///
/// The full item shape returned for a confident match and by
/// `find_all_above_threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedItem {
    /// Item id
    pub id: String,
    /// Display name
    pub name: String,
    /// Canonical embedding key
    pub canonical_name: String,
    /// Container id
    pub box_id: String,
    /// Container display name
    pub box_name: String,
    /// Similarity to the query
    pub score: SimilarityScore,
}

impl From<VectorMatch> for MatchedItem {
    fn from(hit: VectorMatch) -> Self {
        Self {
            id: hit.id,
            name: hit.metadata.name,
            canonical_name: hit.metadata.canonical_name,
            box_id: hit.metadata.box_id,
            box_name: hit.metadata.box_name,
            score: hit.score,
        }
    }
}

/// Value Object: "Did you mean" Suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Item id
    pub id: String,
    /// Display name
    pub name: String,
    /// Similarity to the query
    pub score: SimilarityScore,
    /// Container display name
    pub box_name: String,
}

impl From<VectorMatch> for Suggestion {
    fn from(hit: VectorMatch) -> Self {
        Self {
            id: hit.id,
            name: hit.metadata.name,
            score: hit.score,
            box_name: hit.metadata.box_name,
        }
    }
}

/// Value Object: Match Result
///
/// ## Business Rules
///
/// - `suggestions` is ordered by descending score
/// - a confident `best_match` never appears in its own `suggestions`
/// - without a confident match, the top candidate is `suggestions[0]`
/// - `best_score` is the top score even when it is below the threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The confident match, if the top candidate cleared the threshold
    pub best_match: Option<MatchedItem>,
    /// Top candidate score (zero when nothing matched at all)
    pub best_score: SimilarityScore,
    /// Ranked alternatives for disambiguation
    pub suggestions: Vec<Suggestion>,
}

impl MatchResult {
    /// Result for an empty index or a blank query
    pub fn empty() -> Self {
        Self {
            best_match: None,
            best_score: SimilarityScore::ZERO,
            suggestions: Vec::new(),
        }
    }

    /// Whether the top candidate cleared the threshold
    pub fn is_confident(&self) -> bool {
        self.best_match.is_some()
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::empty()
    }
}
