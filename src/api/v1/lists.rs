//! TodoList management handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, IdInput, TodoList, TodoListRepository};

use super::{ApiResult, ErrorResponse, json_body, map_db_error};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct TodoListResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Groceries")]
    pub name: String,
}

impl From<TodoList> for TodoListResponse {
    fn from(l: TodoList) -> Self {
        Self {
            id: l.id,
            name: l.name,
        }
    }
}

/// Body for both creating and renaming a list.
///
/// `name` is optional here so that a missing name is reported by the store
/// with its own message rather than as a deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ListNameRequest {
    #[schema(example = "Groceries")]
    pub name: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/toDoLists",
    tag = "lists",
    responses(
        (status = 200, description = "All lists in creation order", body = Vec<TodoListResponse>)
    )
)]
#[instrument(skip(state))]
pub async fn list_lists<D: Database>(
    State(state): State<AppState<D>>,
) -> Json<Vec<TodoListResponse>> {
    let lists = state.db().lists().all();
    Json(lists.into_iter().map(TodoListResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/toDoLists/{todoListId}",
    tag = "lists",
    params(("todoListId" = String, Path, description = "TodoList ID")),
    responses(
        (status = 200, description = "TodoList found", body = TodoListResponse),
        (status = 400, description = "Invalid TodoList ID", body = ErrorResponse),
        (status = 404, description = "TodoList not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> ApiResult<Json<TodoListResponse>> {
    let list = state
        .db()
        .lists()
        .get(&IdInput::from(id))
        .map_err(map_db_error)?;

    Ok(Json(TodoListResponse::from(list)))
}

#[utoipa::path(
    post,
    path = "/api/toDoLists",
    tag = "lists",
    request_body = ListNameRequest,
    responses(
        (status = 201, description = "TodoList created", body = TodoListResponse),
        (status = 400, description = "Missing name or name already taken", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_list<D: Database>(
    State(state): State<AppState<D>>,
    body: Result<Json<ListNameRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<TodoListResponse>)> {
    let req = json_body(body)?;
    let list = state
        .db()
        .lists()
        .create(req.name.as_deref())
        .map_err(map_db_error)?;

    Ok((StatusCode::CREATED, Json(TodoListResponse::from(list))))
}

#[utoipa::path(
    put,
    path = "/api/toDoLists/{todoListId}",
    tag = "lists",
    params(("todoListId" = String, Path, description = "TodoList ID")),
    request_body = ListNameRequest,
    responses(
        (status = 200, description = "TodoList renamed", body = TodoListResponse),
        (status = 400, description = "Invalid input or name already taken", body = ErrorResponse),
        (status = 404, description = "TodoList not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    body: Result<Json<ListNameRequest>, JsonRejection>,
) -> ApiResult<Json<TodoListResponse>> {
    let req = json_body(body)?;
    let list = state
        .db()
        .lists()
        .update(&IdInput::from(id), req.name.as_deref())
        .map_err(map_db_error)?;

    Ok(Json(TodoListResponse::from(list)))
}

#[utoipa::path(
    delete,
    path = "/api/toDoLists/{todoListId}",
    tag = "lists",
    params(("todoListId" = String, Path, description = "TodoList ID")),
    responses(
        (status = 200, description = "TodoList and its items deleted"),
        (status = 400, description = "Invalid TodoList ID", body = ErrorResponse),
        (status = 404, description = "TodoList not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .db()
        .lists()
        .delete(&IdInput::from(id))
        .map_err(map_db_error)?;

    Ok(StatusCode::OK)
}
