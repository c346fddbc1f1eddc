//! Vector Index Value Objects
//!
//! What goes into the vector index on upsert and what comes back out of a
//! query. Metadata is an exact echo of what was stored; nothing is
//! reconstructed from the id.

use serde::{Deserialize, Serialize};

use crate::value_objects::SimilarityScore;

/// Value Object: Item Metadata
///
/// Stored next to every item vector under exactly four keys: `name`,
/// `canonical_name`, `box_id`, `box_name`. Missing keys deserialize to empty
/// strings so older index entries still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Canonical embedding key
    #[serde(default)]
    pub canonical_name: String,
    /// Container id
    #[serde(default)]
    pub box_id: String,
    /// Container display name
    #[serde(default)]
    pub box_name: String,
}

/// Value Object: Vector Upsert Entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorRecord {
    /// Item id; upserting the same id replaces vector and metadata
    pub id: String,
    /// Embedding values
    pub values: Vec<f32>,
    /// Metadata echoed back by queries
    pub metadata: ItemMetadata,
}

/// Value Object: Ranked Query Hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorMatch {
    /// Item id
    pub id: String,
    /// Similarity to the query vector
    pub score: SimilarityScore,
    /// Metadata as stored at upsert time
    #[serde(default)]
    pub metadata: ItemMetadata,
}
