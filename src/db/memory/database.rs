//! Store state and the `Database` entry point.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::db::{Database, DbError, DbResult, TodoItem, TodoList};

use super::{MemoryItemRepository, MemoryListRepository};

/// Both collections, in insertion order.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) lists: Vec<TodoList>,
    pub(crate) items: Vec<TodoItem>,
}

impl StoreState {
    /// Max existing list ID + 1, or 1 when empty.
    pub(crate) fn next_list_id(&self) -> i64 {
        self.lists.iter().map(|l| l.id).max().map_or(1, |max| max + 1)
    }

    /// Max existing item ID + 1 across all lists, or 1 when empty.
    pub(crate) fn next_item_id(&self) -> i64 {
        self.items.iter().map(|i| i.id).max().map_or(1, |max| max + 1)
    }

    pub(crate) fn list_index(&self, id: i64) -> Option<usize> {
        self.lists.iter().position(|l| l.id == id)
    }

    pub(crate) fn require_list(&self, id: i64, message: impl Into<String>) -> DbResult<usize> {
        self.list_index(id).ok_or_else(|| DbError::not_found(message))
    }

    /// Position of an item, only if it belongs to the given list.
    pub(crate) fn item_index(&self, list_id: i64, item_id: i64) -> Option<usize> {
        self.items
            .iter()
            .position(|i| i.id == item_id && i.list_id == list_id)
    }
}

/// Volatile, process-local store.
///
/// Cheap to share behind an `Arc`; all mutation goes through the
/// repositories returned by [`Database::lists`] and [`Database::items`].
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    state: Mutex<StoreState>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the state. No operation panics halfway through a mutation, so a
    /// poisoned lock still guards consistent data.
    pub(crate) fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Database for MemoryDatabase {
    type Lists<'a> = MemoryListRepository<'a>;
    type Items<'a> = MemoryItemRepository<'a>;

    fn lists(&self) -> Self::Lists<'_> {
        MemoryListRepository::new(self)
    }

    fn items(&self) -> Self::Items<'_> {
        MemoryItemRepository::new(self)
    }
}
