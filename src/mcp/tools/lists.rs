//! Todo list tool implementations
//!
//! Handles all MCP tools for list management operations.

use std::sync::Arc;

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::{
    Database, DbError, DbResult, IdInput, TodoItemRepository, TodoList, TodoListRepository,
};

use super::resolve_list;

/// Name of the list created by `todo_GetExampleList`.
pub const EXAMPLE_LIST_NAME: &str = "Example List";

const EMPTY_LIST_NAME: &str = "List name cannot be empty.";

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListNameParams {
    #[schemars(description = "Exact name of the list")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateListParams {
    #[schemars(description = "Current name of the list to rename")]
    pub name: String,
    #[serde(rename = "newName")]
    #[schemars(description = "New name (optional). Omit to keep the current name.")]
    pub new_name: Option<String>,
}

// =============================================================================
// List Tools
// =============================================================================

/// List management tools
///
/// Generic over `D: Database` for zero-cost abstraction.
pub struct ListTools<D: Database> {
    db: Arc<D>,
}

impl<D: Database> Clone for ListTools<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> ListTools<D> {
    /// Create new ListTools with database
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub fn get_lists(&self) -> Vec<TodoList> {
        self.db.lists().all()
    }

    #[instrument(skip(self))]
    pub fn get_list_by_name(&self, name: &str) -> DbResult<TodoList> {
        resolve_list(self.db.as_ref(), name)
    }

    #[instrument(skip(self))]
    pub fn create_list(&self, name: &str) -> DbResult<TodoList> {
        if name.is_empty() {
            return Err(DbError::invalid_argument(EMPTY_LIST_NAME));
        }
        self.db.lists().create(Some(name))
    }

    /// Rename a list. An absent `new_name` leaves the list as it is.
    ///
    /// Any list already holding `new_name` is a conflict, the renamed list
    /// included.
    #[instrument(skip(self))]
    pub fn update_list(&self, name: &str, new_name: Option<&str>) -> DbResult<TodoList> {
        let list = resolve_list(self.db.as_ref(), name)?;
        if let Some(new_name) = new_name {
            if new_name.is_empty() {
                return Err(DbError::invalid_argument(EMPTY_LIST_NAME));
            }
            if self.db.lists().all().iter().any(|l| l.name == new_name) {
                return Err(DbError::conflict(format!(
                    "List with name \"{new_name}\" already exists."
                )));
            }
        }
        self.db
            .lists()
            .update(&IdInput::from(list.id), Some(new_name.unwrap_or(&list.name)))
    }

    /// Delete a list and its items. Returns a confirmation message.
    #[instrument(skip(self))]
    pub fn delete_list(&self, name: &str) -> DbResult<String> {
        let list = resolve_list(self.db.as_ref(), name)?;
        self.db.lists().delete(&IdInput::from(list.id))?;
        Ok(format!("List \"{name}\" deleted successfully."))
    }

    /// Create a list pre-populated with three items.
    #[instrument(skip(self))]
    pub fn example_list(&self) -> DbResult<TodoList> {
        let list = self.db.lists().create(Some(EXAMPLE_LIST_NAME))?;
        let list_id = IdInput::from(list.id);
        for n in 1..=3 {
            self.db
                .items()
                .add(&list_id, Some(&format!("Example Item {n}")))?;
        }
        Ok(list)
    }
}
