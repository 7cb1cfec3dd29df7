use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::{
    category::{CategoryResponse, CreateCategoryRequest},
    common::{PaginatedResponse, PaginationParams},
};
use uuid::Uuid;
use validator::Validate;

use crate::{AppState, error::WebError};

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = CategoryResponse),
        (status = 303, description = "A category with this name already exists"),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Data integrity error")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let category = state.categories.create(&req).await?;

    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categories",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of categories", body = PaginatedResponse<CategoryResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let (categories, total_items) = state.categories.list(&params).await?;

    let response: PaginatedResponse<CategoryResponse> =
        PaginatedResponse::from_records(categories, &params, total_items);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let category = state.categories.get(id).await?;

    Ok(Json(CategoryResponse::from(category)).into_response())
}
