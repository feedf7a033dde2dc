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
        platform::{CreatePlatformDto, PlatformDto, UpdatePlatformDto},
    },
    server::{
        controller::list_response,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::platform::{CreatePlatformParams, PlatformFilter, UpdatePlatformParams},
        query::executor::ListRequest,
        service::platform::PlatformService,
        state::AppState,
    },
};

/// Tag for grouping platform endpoints in OpenAPI documentation
pub static PLATFORM_TAG: &str = "platform";

/// Query parameters of the platform list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlatformListQuery {
    /// Rows to skip (default: 0)
    pub skip: Option<u64>,
    /// Page size, 1 to 1000 (default: 100)
    pub limit: Option<u64>,
    /// Comma-separated sort columns, `-` prefix for descending: `title`,
    /// `created_at`, `games`, `sales`, `created_by_user`
    pub sort: Option<String>,
    /// Substring of the title, case-insensitive
    pub title: Option<String>,
    /// Substring of the creator's username, case-insensitive
    pub created_by_user: Option<String>,
}

/// List platforms.
///
/// # Returns
/// - `200 OK` - Platforms on the requested page, total count in `X-Total-Count`
/// - `400 Bad Request` - Unknown sort column, bad direction or page bounds
#[utoipa::path(
    get,
    path = "/api/platforms",
    tag = PLATFORM_TAG,
    params(PlatformListQuery),
    responses(
        (status = 200, description = "Platforms on the requested page", body = [PlatformDto],
            headers(("x-total-count" = u64, description = "Platforms matching the filters"))),
        (status = 400, description = "Invalid sort or page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_platforms(
    State(state): State<AppState>,
    Query(query): Query<PlatformListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filters = PlatformFilter {
        title: query.title,
        created_by_user: query.created_by_user,
    }
    .into_predicates();
    let request = ListRequest::from_params(query.skip, query.limit, query.sort.as_deref(), filters)?;

    let page = PlatformService::new(&state.db, &state.catalog)
        .get_paginated(request)
        .await?;

    Ok(list_response(page.map(|platform| platform.into_dto())))
}

/// Get a platform by ID.
#[utoipa::path(
    get,
    path = "/api/platforms/{id}",
    tag = PLATFORM_TAG,
    params(("id" = i32, Path, description = "Platform ID")),
    responses(
        (status = 200, description = "Platform found", body = PlatformDto),
        (status = 404, description = "Platform not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_platform(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let platform = PlatformService::new(&state.db, &state.catalog)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(platform.into_dto())))
}

/// Create a platform.
///
/// # Access Control
/// - `Superuser` - Only superusers can create platforms
///
/// # Returns
/// - `201 Created` - The created platform
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a superuser
/// - `409 Conflict` - Title already taken
#[utoipa::path(
    post,
    path = "/api/platforms",
    tag = PLATFORM_TAG,
    request_body = CreatePlatformDto,
    responses(
        (status = 201, description = "Platform created", body = PlatformDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 409, description = "Title already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_platform(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePlatformDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let platform = PlatformService::new(&state.db, &state.catalog)
        .create(CreatePlatformParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(platform.into_dto())))
}

/// Update a platform.
///
/// # Access Control
/// - `Superuser` - Only superusers can modify platforms
#[utoipa::path(
    patch,
    path = "/api/platforms/{id}",
    tag = PLATFORM_TAG,
    params(("id" = i32, Path, description = "Platform ID")),
    request_body = UpdatePlatformDto,
    responses(
        (status = 200, description = "Platform updated", body = PlatformDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Platform not found", body = ErrorDto),
        (status = 409, description = "Title already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_platform(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePlatformDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let platform = PlatformService::new(&state.db, &state.catalog)
        .update(id, UpdatePlatformParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(platform.into_dto())))
}

/// Delete a platform together with its game links and sales.
///
/// # Access Control
/// - `Superuser` - Only superusers can delete platforms
#[utoipa::path(
    delete,
    path = "/api/platforms/{id}",
    tag = PLATFORM_TAG,
    params(("id" = i32, Path, description = "Platform ID")),
    responses(
        (status = 204, description = "Platform deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Platform not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_platform(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    PlatformService::new(&state.db, &state.catalog)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete several platforms at once.
///
/// Either every listed platform is deleted or none is; missing ids are all reported.
///
/// # Access Control
/// - `Superuser` - Only superusers can delete platforms
#[utoipa::path(
    delete,
    path = "/api/platforms",
    tag = PLATFORM_TAG,
    request_body = BulkDeleteDto,
    responses(
        (status = 200, description = "Platforms deleted", body = DeletedDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Some ids do not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_platforms(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkDeleteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let deleted = PlatformService::new(&state.db, &state.catalog)
        .delete_many(&payload.ids)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}
