use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors caused by the list parameters or relation ids a client sent.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Sort token names a column outside the entity's allow-list.
    #[error("Invalid sort column: {0}")]
    InvalidOrderColumn(String),

    /// Sort token carries a malformed direction, or both a sign and a suffix.
    #[error("Invalid sort direction in token: {0}")]
    InvalidDirection(String),

    /// Pagination parameters out of range.
    #[error("Invalid page: {0}")]
    InvalidPage(String),

    /// One or more ids supplied for a relation do not exist.
    ///
    /// # Fields
    /// - `entity` - Name of the related entity
    /// - `ids` - Every missing id, ascending
    #[error("{entity} not found for ids: {}", join_ids(.ids))]
    RelationNotFound { entity: &'static str, ids: Vec<i32> },
}

fn join_ids(ids: &[i32]) -> String {
    ids.iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Converts query errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For invalid sort tokens and page bounds
/// - 404 Not Found - For relation ids without a matching row
impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::RelationNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
