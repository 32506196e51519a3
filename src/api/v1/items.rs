//! TodoItem management handlers.
//!
//! Items are always addressed through their list:
//! `/api/toDoLists/{todoListId}/items[/{todoItemId}]`.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, IdInput, ItemPatch, TodoItem, TodoItemRepository};

use super::{ApiResult, ErrorResponse, json_body, map_db_error};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub list_id: i64,
    #[schema(example = "buy milk")]
    pub description: String,
    #[schema(example = false)]
    pub completed: bool,
}

impl From<TodoItem> for TodoItemResponse {
    fn from(i: TodoItem) -> Self {
        Self {
            id: i.id,
            list_id: i.list_id,
            description: i.description,
            completed: i.completed,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    #[schema(example = "buy milk")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    /// Omit to keep the current description. `null` and `""` are rejected.
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schema(value_type = Option<String>, example = "buy oat milk")]
    pub description: Option<Option<String>>,
    #[schema(example = true)]
    pub completed: Option<bool>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            description: req.description,
            completed: req.completed,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/toDoLists/{todoListId}/items",
    tag = "items",
    params(("todoListId" = String, Path, description = "TodoList ID")),
    responses(
        (status = 200, description = "Items of the list in creation order", body = Vec<TodoItemResponse>),
        (status = 400, description = "Invalid TodoList ID", body = ErrorResponse),
        (status = 404, description = "TodoList not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_items<D: Database>(
    State(state): State<AppState<D>>,
    Path(list_id): Path<String>,
) -> ApiResult<Json<Vec<TodoItemResponse>>> {
    let items = state
        .db()
        .items()
        .all(&IdInput::from(list_id))
        .map_err(map_db_error)?;

    Ok(Json(items.into_iter().map(TodoItemResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/toDoLists/{todoListId}/items",
    tag = "items",
    params(("todoListId" = String, Path, description = "TodoList ID")),
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "TodoItem created", body = TodoItemResponse),
        (status = 400, description = "Invalid ID or missing description", body = ErrorResponse),
        (status = 404, description = "TodoList not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn add_item<D: Database>(
    State(state): State<AppState<D>>,
    Path(list_id): Path<String>,
    body: Result<Json<CreateItemRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TodoItemResponse>)> {
    let req = json_body(body)?;
    let item = state
        .db()
        .items()
        .add(&IdInput::from(list_id), req.description.as_deref())
        .map_err(map_db_error)?;

    Ok((StatusCode::CREATED, Json(TodoItemResponse::from(item))))
}

#[utoipa::path(
    put,
    path = "/api/toDoLists/{todoListId}/items/{todoItemId}",
    tag = "items",
    params(
        ("todoListId" = String, Path, description = "TodoList ID"),
        ("todoItemId" = String, Path, description = "TodoItem ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "TodoItem updated", body = TodoItemResponse),
        (status = 400, description = "Invalid ID or empty description", body = ErrorResponse),
        (status = 404, description = "TodoList or TodoItem not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_item<D: Database>(
    State(state): State<AppState<D>>,
    Path((list_id, item_id)): Path<(String, String)>,
    body: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> ApiResult<Json<TodoItemResponse>> {
    let req = json_body(body)?;
    let item = state
        .db()
        .items()
        .update(
            &IdInput::from(list_id),
            &IdInput::from(item_id),
            &ItemPatch::from(req),
        )
        .map_err(map_db_error)?;

    Ok(Json(TodoItemResponse::from(item)))
}

#[utoipa::path(
    delete,
    path = "/api/toDoLists/{todoListId}/items/{todoItemId}",
    tag = "items",
    params(
        ("todoListId" = String, Path, description = "TodoList ID"),
        ("todoItemId" = String, Path, description = "TodoItem ID")
    ),
    responses(
        (status = 200, description = "TodoItem deleted"),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "TodoList or TodoItem not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_item<D: Database>(
    State(state): State<AppState<D>>,
    Path((list_id, item_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    state
        .db()
        .items()
        .delete(&IdInput::from(list_id), &IdInput::from(item_id))
        .map_err(map_db_error)?;

    Ok(StatusCode::OK)
}
