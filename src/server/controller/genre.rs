use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{BulkDeleteDto, DeletedDto, ErrorDto},
        genre::{CreateGenreDto, GenreDto, UpdateGenreDto},
    },
    server::{
        controller::list_response,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::genre::{CreateGenreParams, GenreFilter, UpdateGenreParams},
        query::executor::ListRequest,
        service::genre::GenreService,
        state::AppState,
    },
};

/// Tag for grouping genre endpoints in OpenAPI documentation
pub static GENRE_TAG: &str = "genre";

/// Query parameters of the genre list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenreListQuery {
    /// Rows to skip (default: 0)
    pub skip: Option<u64>,
    /// Page size, 1 to 1000 (default: 100)
    pub limit: Option<u64>,
    /// Comma-separated sort columns, `-` prefix for descending: `title`,
    /// `created_at`, `games`, `created_by_user`
    pub sort: Option<String>,
    /// Substring of the title, case-insensitive
    pub title: Option<String>,
    /// Substring of the creator's username, case-insensitive
    pub created_by_user: Option<String>,
}

/// List genres.
///
/// # Returns
/// - `200 OK` - Genres on the requested page, total count in `X-Total-Count`
/// - `400 Bad Request` - Unknown sort column, bad direction or page bounds
#[utoipa::path(
    get,
    path = "/api/genres",
    tag = GENRE_TAG,
    params(GenreListQuery),
    responses(
        (status = 200, description = "Genres on the requested page", body = [GenreDto],
            headers(("x-total-count" = u64, description = "Genres matching the filters"))),
        (status = 400, description = "Invalid sort or page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_genres(
    State(state): State<AppState>,
    Query(query): Query<GenreListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filters = GenreFilter {
        title: query.title,
        created_by_user: query.created_by_user,
    }
    .into_predicates();
    let request = ListRequest::from_params(query.skip, query.limit, query.sort.as_deref(), filters)?;

    let page = GenreService::new(&state.db, &state.catalog)
        .get_paginated(request)
        .await?;

    Ok(list_response(page.map(|genre| genre.into_dto())))
}

/// Get a genre by ID.
#[utoipa::path(
    get,
    path = "/api/genres/{id}",
    tag = GENRE_TAG,
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre found", body = GenreDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let genre = GenreService::new(&state.db, &state.catalog)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(genre.into_dto())))
}

/// Create a genre.
///
/// # Access Control
/// - `Superuser` - Only superusers can create genres
///
/// # Returns
/// - `201 Created` - The created genre
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a superuser
/// - `409 Conflict` - Title already taken
#[utoipa::path(
    post,
    path = "/api/genres",
    tag = GENRE_TAG,
    request_body = CreateGenreDto,
    responses(
        (status = 201, description = "Genre created", body = GenreDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 409, description = "Title already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_genre(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGenreDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let genre = GenreService::new(&state.db, &state.catalog)
        .create(CreateGenreParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(genre.into_dto())))
}

/// Update a genre.
///
/// # Access Control
/// - `Superuser` - Only superusers can modify genres
#[utoipa::path(
    patch,
    path = "/api/genres/{id}",
    tag = GENRE_TAG,
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = UpdateGenreDto,
    responses(
        (status = 200, description = "Genre updated", body = GenreDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 409, description = "Title already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_genre(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGenreDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let genre = GenreService::new(&state.db, &state.catalog)
        .update(id, UpdateGenreParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(genre.into_dto())))
}

/// Delete a genre together with its game links.
///
/// # Access Control
/// - `Superuser` - Only superusers can delete genres
#[utoipa::path(
    delete,
    path = "/api/genres/{id}",
    tag = GENRE_TAG,
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    GenreService::new(&state.db, &state.catalog)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete several genres at once.
///
/// Either every listed genre is deleted or none is; missing ids are all reported.
///
/// # Access Control
/// - `Superuser` - Only superusers can delete genres
#[utoipa::path(
    delete,
    path = "/api/genres",
    tag = GENRE_TAG,
    request_body = BulkDeleteDto,
    responses(
        (status = 200, description = "Genres deleted", body = DeletedDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Some ids do not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_genres(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkDeleteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let deleted = GenreService::new(&state.db, &state.catalog)
        .delete_many(&payload.ids)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}
