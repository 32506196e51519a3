//! Repository traits for data access abstraction.
//!
//! These traits define the store's operation set. Adapters depend on them,
//! never on a concrete backend.

use crate::db::{
    DbResult, IdInput,
    models::{ItemPatch, TodoItem, TodoList},
};

/// Repository for TodoList operations.
pub trait TodoListRepository {
    /// All lists in insertion order.
    fn all(&self) -> Vec<TodoList>;

    /// Get a list by ID.
    fn get(&self, id: &IdInput) -> DbResult<TodoList>;

    /// Create a list with the next available ID.
    fn create(&self, name: Option<&str>) -> DbResult<TodoList>;

    /// Rename an existing list in place.
    fn update(&self, id: &IdInput, name: Option<&str>) -> DbResult<TodoList>;

    /// Delete a list together with all of its items.
    fn delete(&self, id: &IdInput) -> DbResult<()>;
}

/// Repository for TodoItem operations.
pub trait TodoItemRepository {
    /// All items of an existing list in insertion order.
    fn all(&self, list_id: &IdInput) -> DbResult<Vec<TodoItem>>;

    /// Add an uncompleted item to an existing list.
    fn add(&self, list_id: &IdInput, description: Option<&str>) -> DbResult<TodoItem>;

    /// Apply a partial update to an item of a list.
    fn update(&self, list_id: &IdInput, item_id: &IdInput, patch: &ItemPatch)
    -> DbResult<TodoItem>;

    /// Delete a single item of a list.
    fn delete(&self, list_id: &IdInput, item_id: &IdInput) -> DbResult<()>;
}

/// Combined store interface.
pub trait Database: Send + Sync {
    type Lists<'a>: TodoListRepository
    where
        Self: 'a;
    type Items<'a>: TodoItemRepository
    where
        Self: 'a;

    /// Get the list repository.
    fn lists(&self) -> Self::Lists<'_>;

    /// Get the item repository.
    fn items(&self) -> Self::Items<'_>;
}
