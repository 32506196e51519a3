//! V1 API handlers.

mod items;
mod lists;
mod system;

#[cfg(test)]
mod lists_test;

pub use items::*;
pub use lists::*;
pub use system::*;

use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use crate::db::DbError;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status code
    #[schema(example = 404)]
    pub status_code: u16,
    /// HTTP reason phrase
    #[schema(example = "Not Found")]
    pub error: String,
    /// Error message
    #[schema(example = "Todo list not found")]
    pub message: String,
}

pub type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

/// Translate a store error into a status and JSON body.
///
/// Conflicts are reported as 400, like any other rejected input.
pub fn map_db_error(e: DbError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        DbError::InvalidArgument { .. } | DbError::Conflict { .. } => StatusCode::BAD_REQUEST,
        DbError::NotFound { .. } => StatusCode::NOT_FOUND,
    };
    (
        status,
        Json(ErrorResponse {
            status_code: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message: e.to_string(),
        }),
    )
}

/// Unwrap a JSON body, reporting an unreadable one as invalid input.
///
/// Covers malformed JSON, wrongly typed fields and a missing
/// `Content-Type: application/json`.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(map_db_error(DbError::invalid_argument(
            rejection.body_text(),
        ))),
    }
}
