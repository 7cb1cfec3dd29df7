use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::{
    common::{PaginatedResponse, PaginationParams},
    training_center::{CreateTrainingCenterRequest, TrainingCenterResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::{AppState, error::WebError};

#[utoipa::path(
    post,
    path = "/api/training-centers",
    request_body = CreateTrainingCenterRequest,
    responses(
        (status = 201, description = "Training center created successfully", body = TrainingCenterResponse),
        (status = 303, description = "A training center with this name already exists"),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Data integrity error")
    ),
    tag = "training-centers"
)]
pub async fn create_training_center(
    State(state): State<AppState>,
    Json(req): Json<CreateTrainingCenterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let center = state.training_centers.create(&req).await?;

    Ok((
        StatusCode::CREATED,
        Json(TrainingCenterResponse::from(center)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/training-centers",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of training centers", body = PaginatedResponse<TrainingCenterResponse>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "training-centers"
)]
pub async fn list_training_centers(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Response, WebError> {
    params.validate().map_err(WebError::BadRequest)?;

    let (centers, total_items) = state.training_centers.list(&params).await?;

    let response: PaginatedResponse<TrainingCenterResponse> =
        PaginatedResponse::from_records(centers, &params, total_items);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/training-centers/{id}",
    params(
        ("id" = Uuid, Path, description = "Training center id")
    ),
    responses(
        (status = 200, description = "Training center found", body = TrainingCenterResponse),
        (status = 404, description = "Training center not found")
    ),
    tag = "training-centers"
)]
pub async fn get_training_center(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let center = state.training_centers.get(id).await?;

    Ok(Json(TrainingCenterResponse::from(center)).into_response())
}
