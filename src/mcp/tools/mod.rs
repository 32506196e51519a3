//! MCP tool implementations
//!
//! This module contains tool logic organized by entity type. Tools address
//! lists by name and items by description; both are resolved to ids here
//! before the store is called.

mod items;
mod lists;

#[cfg(test)]
mod lists_test;

pub use items::*;
pub use lists::*;

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

use crate::db::{Database, DbError, DbResult, TodoList, TodoListRepository};

/// First list whose name matches exactly.
pub(crate) fn resolve_list<D: Database>(db: &D, name: &str) -> DbResult<TodoList> {
    db.lists()
        .all()
        .into_iter()
        .find(|list| list.name == name)
        .ok_or_else(|| DbError::not_found(format!("List with name \"{name}\" not found.")))
}

/// Compact JSON, the shape clients of these tools parse.
pub(crate) fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("Error: {e}"))
}

/// Wrap a tool outcome as a successful call result.
///
/// Failures become an `Error: ...` text payload instead of a protocol
/// error, so a client always gets a readable answer.
pub fn into_call_result(outcome: DbResult<String>) -> CallToolResult {
    let text = match outcome {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(error = %e, "tool call rejected");
            format!("Error: {e}")
        }
    };
    CallToolResult::success(vec![Content::text(text)])
}
