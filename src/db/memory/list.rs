//! In-memory TodoListRepository.

use tracing::{debug, instrument};

use crate::db::{
    DbError, DbResult, IdInput, IdKind, TodoList, TodoListRepository, parse_required_id,
    parse_required_text,
};

use super::MemoryDatabase;

const LIST_NOT_FOUND: &str = "Todo list not found";
const LIST_EXISTS: &str = "Todo list already exists";

#[derive(Debug, Clone, Copy)]
pub struct MemoryListRepository<'a> {
    db: &'a MemoryDatabase,
}

impl<'a> MemoryListRepository<'a> {
    pub(crate) fn new(db: &'a MemoryDatabase) -> Self {
        Self { db }
    }
}

impl TodoListRepository for MemoryListRepository<'_> {
    #[instrument(skip(self), level = "debug")]
    fn all(&self) -> Vec<TodoList> {
        self.db.lock().lists.clone()
    }

    #[instrument(skip(self), level = "debug")]
    fn get(&self, id: &IdInput) -> DbResult<TodoList> {
        let id = parse_required_id(id, IdKind::List)?;
        let state = self.db.lock();
        state
            .lists
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found(LIST_NOT_FOUND))
    }

    #[instrument(skip(self), level = "debug")]
    fn create(&self, name: Option<&str>) -> DbResult<TodoList> {
        let name = parse_required_text(name)
            .ok_or_else(|| DbError::invalid_argument("Name is required for creating a todo list"))?;

        let mut state = self.db.lock();
        if state.lists.iter().any(|l| l.name == name) {
            return Err(DbError::conflict(LIST_EXISTS));
        }

        let list = TodoList {
            id: state.next_list_id(),
            name: name.to_string(),
        };
        state.lists.push(list.clone());
        debug!(list_id = list.id, "created list");
        Ok(list)
    }

    #[instrument(skip(self), level = "debug")]
    fn update(&self, id: &IdInput, name: Option<&str>) -> DbResult<TodoList> {
        let id = parse_required_id(id, IdKind::List)?;
        let name = parse_required_text(name)
            .ok_or_else(|| DbError::invalid_argument("Name is required for updating a todo list"))?;

        let mut state = self.db.lock();
        let index = state.require_list(id, LIST_NOT_FOUND)?;
        if state.lists.iter().any(|l| l.id != id && l.name == name) {
            return Err(DbError::conflict(LIST_EXISTS));
        }

        let list = &mut state.lists[index];
        list.name = name.to_string();
        Ok(list.clone())
    }

    #[instrument(skip(self), level = "debug")]
    fn delete(&self, id: &IdInput) -> DbResult<()> {
        let id = parse_required_id(id, IdKind::List)?;

        let mut state = self.db.lock();
        let index = state.require_list(id, LIST_NOT_FOUND)?;
        state.lists.remove(index);
        let before = state.items.len();
        state.items.retain(|i| i.list_id != id);
        debug!(
            list_id = id,
            removed_items = before - state.items.len(),
            "deleted list"
        );
        Ok(())
    }
}
