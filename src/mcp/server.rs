//! MCP server implementation
//!
//! This module implements the main MCP server coordinator. Each `#[tool]`
//! method is a thin wrapper that delegates to `ListTools` / `ItemTools` and
//! folds the outcome into a text result.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::db::Database;

use super::tools::{
    CreateItemParams, ItemRefParams, ItemTools, ListItemsParams, ListNameParams, ListTools,
    UpdateItemParams, UpdateListParams, into_call_result, to_json,
};

/// Main MCP server coordinator
///
/// Generic over `D: Database` for zero-cost abstraction (no dynamic dispatch).
/// Every session gets its own `McpServer`, all sharing one store.
pub struct McpServer<D: Database> {
    list_tools: ListTools<D>,
    item_tools: ItemTools<D>,
    pub(crate) tool_router: ToolRouter<Self>,
}

impl<D: Database + 'static> Clone for McpServer<D> {
    fn clone(&self) -> Self {
        Self {
            list_tools: self.list_tools.clone(),
            item_tools: self.item_tools.clone(),
            tool_router: self.tool_router.clone(),
        }
    }
}

#[tool_router]
impl<D: Database + 'static> McpServer<D> {
    /// Create a new MCP server over the given store
    pub fn new(db: Arc<D>) -> Self {
        Self {
            list_tools: ListTools::new(Arc::clone(&db)),
            item_tools: ItemTools::new(db),
            tool_router: Self::tool_router(),
        }
    }

    // =========================================================================
    // Lists
    // =========================================================================

    #[tool(name = "todo_GetLists", description = "List all lists.")]
    pub async fn get_lists(&self) -> Result<CallToolResult, McpError> {
        Ok(into_call_result(Ok(to_json(&self.list_tools.get_lists()))))
    }

    #[tool(name = "todo_GetListByName", description = "Get a specific list by name.")]
    pub async fn get_list_by_name(
        &self,
        params: Parameters<ListNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.list_tools.get_list_by_name(&params.0.name);
        Ok(into_call_result(outcome.map(|l| to_json(&l))))
    }

    #[tool(name = "todo_CreateList", description = "Create a new list.")]
    pub async fn create_list(
        &self,
        params: Parameters<ListNameParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.list_tools.create_list(&params.0.name);
        Ok(into_call_result(outcome.map(|l| to_json(&l))))
    }

    #[tool(name = "todo_UpdateList", description = "Update an existing list.")]
    pub async fn update_list(
        &self,
        params: Parameters<UpdateListParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateListParams { name, new_name } = params.0;
        let outcome = self.list_tools.update_list(&name, new_name.as_deref());
        Ok(into_call_result(outcome.map(|l| to_json(&l))))
    }

    #[tool(
        name = "todo_DeleteList",
        description = "Delete a list. All items in the list are deleted with it."
    )]
    pub async fn delete_list(
        &self,
        params: Parameters<ListNameParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_call_result(self.list_tools.delete_list(&params.0.name)))
    }

    #[tool(
        name = "todo_GetExampleList",
        description = "Get an example list. Creates \"Example List\" with three items."
    )]
    pub async fn get_example_list(&self) -> Result<CallToolResult, McpError> {
        let outcome = self.list_tools.example_list();
        Ok(into_call_result(outcome.map(|l| to_json(&l))))
    }

    // =========================================================================
    // Items
    // =========================================================================

    #[tool(name = "items_GetItemsFromList", description = "List all items in a list.")]
    pub async fn get_items_from_list(
        &self,
        params: Parameters<ListItemsParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self.item_tools.get_items(&params.0.list_name);
        Ok(into_call_result(outcome.map(|items| to_json(&items))))
    }

    #[tool(
        name = "items_GetItemInformationFromList",
        description = "Get information about a specific item in a list."
    )]
    pub async fn get_item_information(
        &self,
        params: Parameters<ItemRefParams>,
    ) -> Result<CallToolResult, McpError> {
        let ItemRefParams {
            list_name,
            item_description,
        } = params.0;
        let outcome = self.item_tools.get_item(&list_name, &item_description);
        Ok(into_call_result(outcome.map(|i| to_json(&i))))
    }

    #[tool(name = "items_CreateItemToList", description = "Create a new item in a list.")]
    pub async fn create_item(
        &self,
        params: Parameters<CreateItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let CreateItemParams {
            list_name,
            description,
        } = params.0;
        let outcome = self.item_tools.create_item(&list_name, &description);
        Ok(into_call_result(outcome.map(|i| to_json(&i))))
    }

    #[tool(
        name = "items_UpdateItemInList",
        description = "Update an item in a list. Only the fields provided are changed."
    )]
    pub async fn update_item(
        &self,
        params: Parameters<UpdateItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let UpdateItemParams {
            list_name,
            item_description,
            description,
            completed,
        } = params.0;
        let outcome =
            self.item_tools
                .update_item(&list_name, &item_description, description, completed);
        Ok(into_call_result(outcome.map(|i| to_json(&i))))
    }

    #[tool(name = "items_DeleteItemFromList", description = "Delete an item from a list.")]
    pub async fn delete_item(
        &self,
        params: Parameters<ItemRefParams>,
    ) -> Result<CallToolResult, McpError> {
        let ItemRefParams {
            list_name,
            item_description,
        } = params.0;
        Ok(into_call_result(
            self.item_tools.delete_item(&list_name, &item_description),
        ))
    }
}

#[tool_handler]
impl<D: Database + 'static> ServerHandler for McpServer<D> {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(
            "Todo list MCP server - manage lists by name and the items inside them".to_string(),
        );
        info
    }
}
