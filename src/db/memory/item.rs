//! In-memory TodoItemRepository.

use tracing::{debug, instrument};

use crate::db::{
    DbError, DbResult, IdInput, IdKind, ItemPatch, TodoItem, TodoItemRepository,
    parse_required_id, parse_required_text,
};

use super::MemoryDatabase;

const LIST_NOT_FOUND: &str = "Todo list not found";
const ITEM_NOT_FOUND: &str = "Todo item not found";

#[derive(Debug, Clone, Copy)]
pub struct MemoryItemRepository<'a> {
    db: &'a MemoryDatabase,
}

impl<'a> MemoryItemRepository<'a> {
    pub(crate) fn new(db: &'a MemoryDatabase) -> Self {
        Self { db }
    }
}

impl TodoItemRepository for MemoryItemRepository<'_> {
    #[instrument(skip(self), level = "debug")]
    fn all(&self, list_id: &IdInput) -> DbResult<Vec<TodoItem>> {
        let list_id = parse_required_id(list_id, IdKind::List)?;

        let state = self.db.lock();
        state.require_list(list_id, LIST_NOT_FOUND)?;
        Ok(state
            .items
            .iter()
            .filter(|i| i.list_id == list_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self), level = "debug")]
    fn add(&self, list_id: &IdInput, description: Option<&str>) -> DbResult<TodoItem> {
        let list_id = parse_required_id(list_id, IdKind::List)?;
        let description = parse_required_text(description).ok_or_else(|| {
            DbError::invalid_argument("Description is required for creating a todo item")
        })?;

        let mut state = self.db.lock();
        state.require_list(list_id, format!("Todo list with ID: {list_id} not found"))?;

        let item = TodoItem {
            id: state.next_item_id(),
            list_id,
            description: description.to_string(),
            completed: false,
        };
        state.items.push(item.clone());
        debug!(list_id, item_id = item.id, "added item");
        Ok(item)
    }

    #[instrument(skip(self), level = "debug")]
    fn update(
        &self,
        list_id: &IdInput,
        item_id: &IdInput,
        patch: &ItemPatch,
    ) -> DbResult<TodoItem> {
        let list_id = parse_required_id(list_id, IdKind::List)?;
        let item_id = parse_required_id(item_id, IdKind::Item)?;
        let description = match &patch.description {
            None => None,
            Some(value) => Some(parse_required_text(value.as_deref()).ok_or_else(|| {
                DbError::invalid_argument("Cannot update description to an empty string")
            })?),
        };

        let mut state = self.db.lock();
        state.require_list(list_id, LIST_NOT_FOUND)?;
        let index = state
            .item_index(list_id, item_id)
            .ok_or_else(|| DbError::not_found(ITEM_NOT_FOUND))?;

        let item = &mut state.items[index];
        if let Some(description) = description {
            item.description = description.to_string();
        }
        if let Some(completed) = patch.completed {
            item.completed = completed;
        }
        Ok(item.clone())
    }

    #[instrument(skip(self), level = "debug")]
    fn delete(&self, list_id: &IdInput, item_id: &IdInput) -> DbResult<()> {
        let list_id = parse_required_id(list_id, IdKind::List)?;
        let item_id = parse_required_id(item_id, IdKind::Item)?;

        let mut state = self.db.lock();
        state.require_list(list_id, LIST_NOT_FOUND)?;
        let index = state
            .item_index(list_id, item_id)
            .ok_or_else(|| DbError::not_found(ITEM_NOT_FOUND))?;
        state.items.remove(index);
        debug!(list_id, item_id, "deleted item");
        Ok(())
    }
}
