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
        game::{CreateGameDto, GameDto, UpdateGameDto},
    },
    server::{
        controller::list_response,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::game::{CreateGameParams, GameFilter, UpdateGameParams},
        query::executor::ListRequest,
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Query parameters of the game list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GameListQuery {
    /// Rows to skip (default: 0)
    pub skip: Option<u64>,
    /// Page size, 1 to 1000 (default: 100)
    pub limit: Option<u64>,
    /// Comma-separated sort columns, `-` prefix for descending: `title`,
    /// `released_at`, `created_at`, `sales`, `platforms`, `genres`, `created_by_company`,
    /// `created_by_user`
    pub sort: Option<String>,
    /// Substring of the title, case-insensitive
    pub title: Option<String>,
    /// Substring of the creator's username, case-insensitive
    pub created_by_user: Option<String>,
    /// Substring of the company title, case-insensitive
    pub created_by_company: Option<String>,
}

/// List games.
///
/// # Returns
/// - `200 OK` - Games on the requested page, total count in `X-Total-Count`
/// - `400 Bad Request` - Unknown sort column, bad direction or page bounds
#[utoipa::path(
    get,
    path = "/api/games",
    tag = GAME_TAG,
    params(GameListQuery),
    responses(
        (status = 200, description = "Games on the requested page", body = [GameDto],
            headers(("x-total-count" = u64, description = "Games matching the filters"))),
        (status = 400, description = "Invalid sort or page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<GameListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filters = GameFilter {
        title: query.title,
        created_by_user: query.created_by_user,
        created_by_company: query.created_by_company,
    }
    .into_predicates();
    let request = ListRequest::from_params(query.skip, query.limit, query.sort.as_deref(), filters)?;

    let page = GameService::new(&state.db, &state.catalog)
        .get_paginated(request)
        .await?;

    Ok(list_response(page.map(|game| game.into_dto())))
}

/// Get a game by ID.
#[utoipa::path(
    get,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Game found", body = GameDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db, &state.catalog)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Create a game.
///
/// # Access Control
/// - `Superuser` - Only superusers can create games
///
/// # Returns
/// - `201 Created` - The created game
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a superuser
/// - `409 Conflict` - Title already taken
#[utoipa::path(
    post,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Game created", body = GameDto),
        (status = 404, description = "Company, platform or genre ids do not exist", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 409, description = "Title already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let game = GameService::new(&state.db, &state.catalog)
        .create(CreateGameParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// Update a game.
///
/// # Access Control
/// - `Superuser` - Only superusers can modify games
#[utoipa::path(
    patch,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Game updated", body = GameDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Game not found, or company, platform or genre ids do not exist", body = ErrorDto),
        (status = 409, description = "Title already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_game(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let game = GameService::new(&state.db, &state.catalog)
        .update(id, UpdateGameParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a game together with its links and sales.
///
/// # Access Control
/// - `Superuser` - Only superusers can delete games
#[utoipa::path(
    delete,
    path = "/api/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game ID")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    GameService::new(&state.db, &state.catalog)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete several games at once.
///
/// Either every listed game is deleted or none is; missing ids are all reported.
///
/// # Access Control
/// - `Superuser` - Only superusers can delete games
#[utoipa::path(
    delete,
    path = "/api/games",
    tag = GAME_TAG,
    request_body = BulkDeleteDto,
    responses(
        (status = 200, description = "Games deleted", body = DeletedDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Some ids do not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_games(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkDeleteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let deleted = GameService::new(&state.db, &state.catalog)
        .delete_many(&payload.ids)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}
