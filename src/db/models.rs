//! Domain models for the list store.
//!
//! These are the records the store owns. Callers only ever see clones.

use serde::{Deserialize, Serialize};

/// A named container of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Assigned by the store, never changes.
    pub id: i64,
    /// Unique across all lists (exact, case-sensitive comparison).
    pub name: String,
}

/// A description plus completion flag owned by exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique across the whole item collection, not per list.
    pub id: i64,
    pub list_id: i64,
    pub description: String,
    pub completed: bool,
}

/// Partial update for an item.
///
/// `description` distinguishes an absent field (`None`, no change) from an
/// explicit null (`Some(None)`, rejected like an empty string).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.completed.is_none()
    }
}
