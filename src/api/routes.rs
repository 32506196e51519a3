//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::state::AppState;
use super::v1::{
    self, CreateItemRequest, ErrorResponse, HealthResponse, ListNameRequest, TodoItemResponse,
    TodoListResponse, UpdateItemRequest,
};
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo List API",
        version = "0.1.0",
        description = "In-memory lists and items, also exposed as MCP tools at /mcp",
        license(name = "GPL-2.0")
    ),
    paths(
        v1::health,
        v1::list_lists,
        v1::get_list,
        v1::create_list,
        v1::update_list,
        v1::delete_list,
        v1::list_items,
        v1::add_item,
        v1::update_item,
        v1::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            TodoListResponse,
            ListNameRequest,
            TodoItemResponse,
            CreateItemRequest,
            UpdateItemRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "lists", description = "Todo list management endpoints"),
        (name = "items", description = "Todo item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let list_routes = routes!(D => {
        get "/api/toDoLists" => v1::list_lists,
        post "/api/toDoLists" => v1::create_list,
        get "/api/toDoLists/{todoListId}" => v1::get_list,
        put "/api/toDoLists/{todoListId}" => v1::update_list,
        delete "/api/toDoLists/{todoListId}" => v1::delete_list,
    });

    let item_routes = routes!(D => {
        get "/api/toDoLists/{todoListId}/items" => v1::list_items,
        post "/api/toDoLists/{todoListId}/items" => v1::add_item,
        put "/api/toDoLists/{todoListId}/items/{todoItemId}" => v1::update_item,
        delete "/api/toDoLists/{todoListId}/items/{todoItemId}" => v1::delete_item,
    });

    Router::new()
        .route("/health", get(v1::health))
        .merge(list_routes)
        .merge(item_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
