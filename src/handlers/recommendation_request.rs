//! `/api/recommendationrequests`: full CRUD over recommendation requests.

use super::IdQuery;
use crate::entities::{RecommendationRequest, RecommendationRequestParams};
use crate::error::{AppError, ErrorResponse};
use crate::extractors::{AdminRole, Authorized, UserRole};
use crate::response::{generic_message, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

/// List all recommendation requests
#[utoipa::path(
    get,
    path = "/api/recommendationrequests/all",
    tag = "Recommendation Requests",
    responses(
        (status = 200, description = "Every request", body = [RecommendationRequest]),
        (status = 403, description = "Not signed in", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn all_requests(
    _auth: Authorized<UserRole>,
    State(state): State<AppState>,
) -> Result<Json<Vec<RecommendationRequest>>, AppError> {
    Ok(Json(state.recommendation_requests.list().await?))
}

/// Create a new recommendation request
#[utoipa::path(
    post,
    path = "/api/recommendationrequests/post",
    tag = "Recommendation Requests",
    params(RecommendationRequestParams),
    responses(
        (status = 200, description = "The saved request", body = RecommendationRequest),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn post_request(
    _auth: Authorized<AdminRole>,
    State(state): State<AppState>,
    Query(params): Query<RecommendationRequestParams>,
) -> Result<Json<RecommendationRequest>, AppError> {
    let saved = state.recommendation_requests.create(params.into()).await?;
    Ok(Json(saved))
}

/// Get a single recommendation request
#[utoipa::path(
    get,
    path = "/api/recommendationrequests",
    tag = "Recommendation Requests",
    params(("id" = i64, Query, description = "id of the request")),
    responses(
        (status = 200, description = "The request", body = RecommendationRequest),
        (status = 404, description = "No request with that id", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_request(
    _auth: Authorized<UserRole>,
    State(state): State<AppState>,
    Query(IdQuery { id }): Query<IdQuery<i64>>,
) -> Result<Json<RecommendationRequest>, AppError> {
    Ok(Json(state.recommendation_requests.get(&id).await?))
}

/// Update a single recommendation request
#[utoipa::path(
    put,
    path = "/api/recommendationrequests",
    tag = "Recommendation Requests",
    params(("id" = i64, Query, description = "id of the request")),
    request_body = RecommendationRequest,
    responses(
        (status = 200, description = "The updated request", body = RecommendationRequest),
        (status = 404, description = "No request with that id", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn update_request(
    _auth: Authorized<AdminRole>,
    State(state): State<AppState>,
    Query(IdQuery { id }): Query<IdQuery<i64>>,
    Json(incoming): Json<RecommendationRequest>,
) -> Result<Json<RecommendationRequest>, AppError> {
    Ok(Json(state.recommendation_requests.update(&id, incoming).await?))
}

/// Delete a recommendation request
#[utoipa::path(
    delete,
    path = "/api/recommendationrequests",
    tag = "Recommendation Requests",
    params(("id" = i64, Query, description = "id of the request")),
    responses(
        (status = 200, description = "Deletion confirmed", body = MessageResponse),
        (status = 404, description = "No request with that id", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_request(
    _auth: Authorized<AdminRole>,
    State(state): State<AppState>,
    Query(IdQuery { id }): Query<IdQuery<i64>>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.recommendation_requests.delete(&id).await?;
    Ok(generic_message(message))
}
