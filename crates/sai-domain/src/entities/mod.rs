//! Domain Entities
//!
//! Inventory objects with identity. Ids are opaque strings assigned by the
//! backing store and never change once created.
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Item`] | A stored thing, living in exactly one box |
//! | [`StorageBox`] | A container items are placed into |

/// Inventory item entity
pub mod item;
/// Storage container entity
pub mod storage_box;

pub use item::Item;
pub use storage_box::StorageBox;
