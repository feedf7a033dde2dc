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
        sale::{CreateSaleDto, SaleDto, UpdateSaleDto},
    },
    server::{
        controller::list_response,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::sale::{CreateSaleParams, SaleFilter, UpdateSaleParams},
        query::executor::ListRequest,
        service::sale::SaleService,
        state::AppState,
    },
};

/// Tag for grouping sale endpoints in OpenAPI documentation
pub static SALE_TAG: &str = "sale";

/// Query parameters of the sale list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SaleListQuery {
    /// Rows to skip (default: 0)
    pub skip: Option<u64>,
    /// Page size, 1 to 1000 (default: 100)
    pub limit: Option<u64>,
    /// Comma-separated sort columns, `-` prefix for descending: `amount`,
    /// `created_at`, `game`, `platform`, `created_by_user`
    pub sort: Option<String>,
    /// Substring of the game title, case-insensitive
    pub game: Option<String>,
    /// Substring of the platform title, case-insensitive
    pub platform: Option<String>,
    /// Substring of the creator's username, case-insensitive
    pub created_by_user: Option<String>,
    /// Smallest amount to include
    pub min_amount: Option<i64>,
    /// Largest amount to include
    pub max_amount: Option<i64>,
}

/// List sales.
///
/// # Returns
/// - `200 OK` - Sales on the requested page, total count in `X-Total-Count`
/// - `400 Bad Request` - Unknown sort column, bad direction or page bounds
#[utoipa::path(
    get,
    path = "/api/sales",
    tag = SALE_TAG,
    params(SaleListQuery),
    responses(
        (status = 200, description = "Sales on the requested page", body = [SaleDto],
            headers(("x-total-count" = u64, description = "Sales matching the filters"))),
        (status = 400, description = "Invalid sort or page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_sales(
    State(state): State<AppState>,
    Query(query): Query<SaleListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filters = SaleFilter {
        game: query.game,
        platform: query.platform,
        created_by_user: query.created_by_user,
        min_amount: query.min_amount,
        max_amount: query.max_amount,
    }
    .into_predicates();
    let request = ListRequest::from_params(query.skip, query.limit, query.sort.as_deref(), filters)?;

    let page = SaleService::new(&state.db, &state.catalog)
        .get_paginated(request)
        .await?;

    Ok(list_response(page.map(|sale| sale.into_dto())))
}

/// Get a sale by ID.
#[utoipa::path(
    get,
    path = "/api/sales/{id}",
    tag = SALE_TAG,
    params(("id" = i32, Path, description = "Sale ID")),
    responses(
        (status = 200, description = "Sale found", body = SaleDto),
        (status = 404, description = "Sale not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let sale = SaleService::new(&state.db, &state.catalog)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(sale.into_dto())))
}

/// Create a sale.
///
/// # Access Control
/// - `Superuser` - Only superusers can create sales
///
/// # Returns
/// - `201 Created` - The created sale
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a superuser
/// - `409 Conflict` - Sale for this game and platform already exists
#[utoipa::path(
    post,
    path = "/api/sales",
    tag = SALE_TAG,
    request_body = CreateSaleDto,
    responses(
        (status = 201, description = "Sale created", body = SaleDto),
        (status = 404, description = "Game or platform does not exist", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 409, description = "Sale for this game and platform already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sale(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSaleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let sale = SaleService::new(&state.db, &state.catalog)
        .create(CreateSaleParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(sale.into_dto())))
}

/// Update a sale.
///
/// # Access Control
/// - `Superuser` - Only superusers can modify sales
#[utoipa::path(
    patch,
    path = "/api/sales/{id}",
    tag = SALE_TAG,
    params(("id" = i32, Path, description = "Sale ID")),
    request_body = UpdateSaleDto,
    responses(
        (status = 200, description = "Sale updated", body = SaleDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Sale not found, or game or platform does not exist", body = ErrorDto),
        (status = 409, description = "Sale for this game and platform already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_sale(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSaleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let sale = SaleService::new(&state.db, &state.catalog)
        .update(id, UpdateSaleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(sale.into_dto())))
}

/// Delete a sale.
///
/// # Access Control
/// - `Superuser` - Only superusers can delete sales
#[utoipa::path(
    delete,
    path = "/api/sales/{id}",
    tag = SALE_TAG,
    params(("id" = i32, Path, description = "Sale ID")),
    responses(
        (status = 204, description = "Sale deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Sale not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_sale(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    SaleService::new(&state.db, &state.catalog)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete several sales at once.
///
/// Either every listed sale is deleted or none is; missing ids are all reported.
///
/// # Access Control
/// - `Superuser` - Only superusers can delete sales
#[utoipa::path(
    delete,
    path = "/api/sales",
    tag = SALE_TAG,
    request_body = BulkDeleteDto,
    responses(
        (status = 200, description = "Sales deleted", body = DeletedDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Some ids do not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_sales(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkDeleteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let deleted = SaleService::new(&state.db, &state.catalog)
        .delete_many(&payload.ids)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}
