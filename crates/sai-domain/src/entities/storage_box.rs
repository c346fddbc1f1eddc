//! Storage container entity

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Entity: Storage Box
///
/// Named `StorageBox` to stay clear of `std::boxed::Box`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageBox {
    /// Opaque id assigned by the backing store
    pub id: String,
    /// Display name, e.g. "BOX B"
    pub name: String,
}

impl StorageBox {
    /// Create a box with a trimmed, non-empty name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(Error::invalid_argument("Box name cannot be empty"));
        }
        Ok(Self {
            id: id.into(),
            name,
        })
    }
}
