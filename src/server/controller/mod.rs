//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into service parameters, call a
//! service and convert the result back into a DTO. List endpoints share the response shape
//! built by `list_response`.

pub mod auth;
pub mod company;
pub mod game;
pub mod genre;
pub mod health;
pub mod platform;
pub mod sale;
pub mod user;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::server::query::executor::Page;

/// Response header carrying the number of rows matching the filters across all pages.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Builds a list response: the page as a JSON array with the total in `X-Total-Count`.
pub fn list_response<T: Serialize>(page: Page<T>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(TOTAL_COUNT_HEADER, page.total.to_string())],
        Json(page.items),
    )
}
