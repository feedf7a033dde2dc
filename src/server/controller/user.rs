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
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::list_response,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParams, UpdateUserParams, UserFilter},
        query::executor::ListRequest,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Query parameters of the user list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListQuery {
    /// Rows to skip (default: 0)
    pub skip: Option<u64>,
    /// Page size, 1 to 1000 (default: 100)
    pub limit: Option<u64>,
    /// Comma-separated sort columns, `-` prefix for descending: `username`, `email`,
    /// `is_superuser`, `is_primary`, `created_at`, `created_companies`, `created_platforms`,
    /// `created_genres`, `created_games`, `created_sales`
    pub sort: Option<String>,
    /// Substring of the username, case-insensitive
    pub username: Option<String>,
    /// Substring of the email, case-insensitive
    pub email: Option<String>,
    pub is_superuser: Option<bool>,
    pub is_primary: Option<bool>,
}

/// List users.
///
/// # Access Control
/// - Any logged in user
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserListQuery),
    responses(
        (status = 200, description = "Users on the requested page", body = [UserDto],
            headers(("x-total-count" = u64, description = "Users matching the filters"))),
        (status = 400, description = "Invalid sort or page parameters", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let filters = UserFilter {
        username: query.username,
        email: query.email,
        is_superuser: query.is_superuser,
        is_primary: query.is_primary,
    }
    .into_predicates();
    let request = ListRequest::from_params(query.skip, query.limit, query.sort.as_deref(), filters)?;

    let page = UserService::new(&state.db, &state.catalog)
        .get_paginated(request)
        .await?;

    Ok(list_response(page.map(|user| user.into_dto())))
}

/// Get a user by ID.
///
/// # Access Control
/// - Any logged in user
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = UserService::new(&state.db, &state.catalog)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Register a user.
///
/// # Access Control
/// - Open to anyone for regular accounts
/// - `Superuser` - Required when `is_superuser` is set
///
/// # Returns
/// - `201 Created` - The created user
/// - `409 Conflict` - Username or email already taken
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 401, description = "Superuser creation without being logged in", body = ErrorDto),
        (status = 403, description = "Superuser creation by a regular user", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.is_superuser {
        let _ = AuthGuard::new(&state.db, &session)
            .require(&[Permission::Superuser])
            .await?;
    }

    let user = UserService::new(&state.db, &state.catalog)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update a user.
///
/// # Access Control
/// - The user themselves, or a superuser
/// - `Superuser` - Required to change `is_superuser`
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to modify this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    if payload.is_superuser.is_some() {
        guard.require(&[Permission::Superuser]).await?;
    } else {
        guard.require(&[Permission::SelfOrSuperuser(id)]).await?;
    }

    let user = UserService::new(&state.db, &state.catalog)
        .update(id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user.
///
/// Records the user created are kept with no creator. The primary user cannot be deleted.
///
/// # Access Control
/// - The user themselves, or a superuser
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this user, or it is the primary user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let requester = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrSuperuser(id)])
        .await?;

    UserService::new(&state.db, &state.catalog)
        .delete(requester.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
