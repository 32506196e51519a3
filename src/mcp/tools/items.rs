//! Todo item tool implementations
//!
//! Items are looked up by their description within a named list; when
//! several items share a description the first one wins.

use std::sync::Arc;

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::{Database, DbError, DbResult, IdInput, ItemPatch, TodoItem, TodoItemRepository};

use super::resolve_list;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListItemsParams {
    #[serde(rename = "listName")]
    #[schemars(description = "Exact name of the list")]
    pub list_name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ItemRefParams {
    #[schemars(description = "Exact name of the list holding the item")]
    pub list_name: String,
    #[schemars(description = "Exact description of the item")]
    pub item_description: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateItemParams {
    #[schemars(description = "Exact name of the list to add the item to")]
    pub list_name: String,
    #[schemars(description = "What needs to be done")]
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateItemParams {
    #[schemars(description = "Exact name of the list holding the item")]
    pub list_name: String,
    #[schemars(description = "Current description of the item to update")]
    pub item_description: String,
    #[schemars(description = "New description (optional)")]
    pub description: Option<String>,
    #[schemars(description = "Mark the item done or not done (optional)")]
    pub completed: Option<bool>,
}

// =============================================================================
// Item Tools
// =============================================================================

pub struct ItemTools<D: Database> {
    db: Arc<D>,
}

impl<D: Database> Clone for ItemTools<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> ItemTools<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    /// Resolve a list name and an item description to the item record.
    fn resolve_item(&self, list_name: &str, item_description: &str) -> DbResult<TodoItem> {
        self.get_items(list_name)?
            .into_iter()
            .find(|item| item.description == item_description)
            .ok_or_else(|| {
                DbError::not_found(format!(
                    "Item with description \"{item_description}\" not found in list \"{list_name}\"."
                ))
            })
    }

    #[instrument(skip(self))]
    pub fn get_items(&self, list_name: &str) -> DbResult<Vec<TodoItem>> {
        let list = resolve_list(self.db.as_ref(), list_name)?;
        self.db.items().all(&IdInput::from(list.id))
    }

    #[instrument(skip(self))]
    pub fn get_item(&self, list_name: &str, item_description: &str) -> DbResult<TodoItem> {
        self.resolve_item(list_name, item_description)
    }

    #[instrument(skip(self))]
    pub fn create_item(&self, list_name: &str, description: &str) -> DbResult<TodoItem> {
        let list = resolve_list(self.db.as_ref(), list_name)?;
        self.db
            .items()
            .add(&IdInput::from(list.id), Some(description))
    }

    #[instrument(skip(self))]
    pub fn update_item(
        &self,
        list_name: &str,
        item_description: &str,
        description: Option<String>,
        completed: Option<bool>,
    ) -> DbResult<TodoItem> {
        let item = self.resolve_item(list_name, item_description)?;
        let patch = ItemPatch {
            description: description.map(Some),
            completed,
        };
        self.db
            .items()
            .update(&IdInput::from(item.list_id), &IdInput::from(item.id), &patch)
    }

    /// Delete an item. Returns a confirmation message.
    #[instrument(skip(self))]
    pub fn delete_item(&self, list_name: &str, item_description: &str) -> DbResult<String> {
        let item = self.resolve_item(list_name, item_description)?;
        self.db
            .items()
            .delete(&IdInput::from(item.list_id), &IdInput::from(item.id))?;
        Ok(format!(
            "Item \"{item_description}\" deleted successfully from list \"{list_name}\"."
        ))
    }
}
