//! Inventory item entity

use serde::{Deserialize, Serialize};

use crate::canonicalize::normalize_to_singular;
use crate::error::{Error, Result};

/// Entity: Inventory Item
///
/// `name` is the display string the user typed. `canonical_name`, when
/// present, is the embedding key; when absent it is derived from `name`
/// at index time so the two never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Opaque id assigned by the backing store
    pub id: String,
    /// Display name, e.g. "AA Batteries"
    pub name: String,
    /// Precomputed canonical name, e.g. "aa battery"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_name: Option<String>,
    /// Units currently stored
    #[serde(default)]
    pub quantity: u32,
    /// Id of the box the item currently resides in
    pub box_id: String,
}

impl Item {
    /// Create an item, rejecting blank ids, names and box ids
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        box_id: impl Into<String>,
    ) -> Result<Self> {
        let item = Self {
            id: id.into(),
            name: name.into().trim().to_string(),
            canonical_name: None,
            quantity: 0,
            box_id: box_id.into(),
        };
        item.validate()?;
        Ok(item)
    }

    /// Set the stored quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set a precomputed canonical name
    pub fn with_canonical_name(mut self, canonical_name: impl Into<String>) -> Self {
        self.canonical_name = Some(canonical_name.into());
        self
    }

    /// Check the invariants an item must hold before it can be indexed
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::invalid_argument("Item id cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(Error::invalid_argument("Item name cannot be empty"));
        }
        if self.box_id.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "Item '{}' is not assigned to a box",
                self.id
            )));
        }
        Ok(())
    }

    /// The embedding key: stored canonical name, or one derived from `name`
    pub fn resolved_canonical_name(&self) -> String {
        match self.canonical_name.as_deref().map(str::trim) {
            Some(canonical) if !canonical.is_empty() => canonical.to_string(),
            _ => normalize_to_singular(&self.name),
        }
    }
}
