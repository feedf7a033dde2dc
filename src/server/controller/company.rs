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
        company::{CompanyDto, CreateCompanyDto, UpdateCompanyDto},
    },
    server::{
        controller::list_response,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::company::{CompanyFilter, CreateCompanyParams, UpdateCompanyParams},
        query::executor::ListRequest,
        service::company::CompanyService,
        state::AppState,
    },
};

/// Tag for grouping company endpoints in OpenAPI documentation
pub static COMPANY_TAG: &str = "company";

/// Query parameters of the company list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompanyListQuery {
    /// Rows to skip (default: 0)
    pub skip: Option<u64>,
    /// Page size, 1 to 1000 (default: 100)
    pub limit: Option<u64>,
    /// Comma-separated sort columns, `-` prefix for descending: `title`, `founded_at`,
    /// `created_at`, `games`, `created_by_user`
    pub sort: Option<String>,
    /// Substring of the title, case-insensitive
    pub title: Option<String>,
    /// Substring of the creator's username, case-insensitive
    pub created_by_user: Option<String>,
}

/// List companies.
///
/// # Returns
/// - `200 OK` - Companies on the requested page, total count in `X-Total-Count`
/// - `400 Bad Request` - Unknown sort column, bad direction or page bounds
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = COMPANY_TAG,
    params(CompanyListQuery),
    responses(
        (status = 200, description = "Companies on the requested page", body = [CompanyDto],
            headers(("x-total-count" = u64, description = "Companies matching the filters"))),
        (status = 400, description = "Invalid sort or page parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(query): Query<CompanyListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filters = CompanyFilter {
        title: query.title,
        created_by_user: query.created_by_user,
    }
    .into_predicates();
    let request = ListRequest::from_params(query.skip, query.limit, query.sort.as_deref(), filters)?;

    let page = CompanyService::new(&state.db, &state.catalog)
        .get_paginated(request)
        .await?;

    Ok(list_response(page.map(|company| company.into_dto())))
}

/// Get a company by ID.
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company found", body = CompanyDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let company = CompanyService::new(&state.db, &state.catalog)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(company.into_dto())))
}

/// Create a company.
///
/// # Access Control
/// - `Superuser` - Only superusers can create companies
///
/// # Returns
/// - `201 Created` - The created company
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a superuser
/// - `409 Conflict` - Title already taken
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = COMPANY_TAG,
    request_body = CreateCompanyDto,
    responses(
        (status = 201, description = "Company created", body = CompanyDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 409, description = "Title already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_company(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCompanyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let company = CompanyService::new(&state.db, &state.catalog)
        .create(CreateCompanyParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(company.into_dto())))
}

/// Update a company.
///
/// # Access Control
/// - `Superuser` - Only superusers can modify companies
#[utoipa::path(
    patch,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company ID")),
    request_body = UpdateCompanyDto,
    responses(
        (status = 200, description = "Company updated", body = CompanyDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 409, description = "Title already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_company(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCompanyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let company = CompanyService::new(&state.db, &state.catalog)
        .update(id, UpdateCompanyParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(company.into_dto())))
}

/// Delete a company and its games.
///
/// # Access Control
/// - `Superuser` - Only superusers can delete companies
#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    tag = COMPANY_TAG,
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_company(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    CompanyService::new(&state.db, &state.catalog)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete several companies at once.
///
/// Either every listed company is deleted or none is; missing ids are all reported.
///
/// # Access Control
/// - `Superuser` - Only superusers can delete companies
#[utoipa::path(
    delete,
    path = "/api/companies",
    tag = COMPANY_TAG,
    request_body = BulkDeleteDto,
    responses(
        (status = 200, description = "Companies deleted", body = DeletedDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a superuser", body = ErrorDto),
        (status = 404, description = "Some ids do not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_companies(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BulkDeleteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Superuser])
        .await?;

    let deleted = CompanyService::new(&state.db, &state.catalog)
        .delete_many(&payload.ids)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}
