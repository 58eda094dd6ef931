//! `/api/menuitemreview`: full CRUD over menu item reviews.

use super::IdQuery;
use crate::entities::{MenuItemReview, MenuItemReviewParams};
use crate::error::{AppError, ErrorResponse};
use crate::extractors::{AdminRole, Authorized, UserRole};
use crate::response::{generic_message, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

/// List all menu item reviews
#[utoipa::path(
    get,
    path = "/api/menuitemreview/all",
    tag = "Menu Item Reviews",
    responses(
        (status = 200, description = "Every review", body = [MenuItemReview]),
        (status = 403, description = "Not signed in", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn all_reviews(
    _auth: Authorized<UserRole>,
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItemReview>>, AppError> {
    Ok(Json(state.menu_item_reviews.list().await?))
}

/// Create a new menu item review
#[utoipa::path(
    post,
    path = "/api/menuitemreview/post",
    tag = "Menu Item Reviews",
    params(MenuItemReviewParams),
    responses(
        (status = 200, description = "The saved review", body = MenuItemReview),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn post_review(
    _auth: Authorized<AdminRole>,
    State(state): State<AppState>,
    Query(params): Query<MenuItemReviewParams>,
) -> Result<Json<MenuItemReview>, AppError> {
    let saved = state.menu_item_reviews.create(params.into()).await?;
    Ok(Json(saved))
}

/// Get a single menu item review
#[utoipa::path(
    get,
    path = "/api/menuitemreview",
    tag = "Menu Item Reviews",
    params(("id" = i64, Query, description = "id of the review")),
    responses(
        (status = 200, description = "The review", body = MenuItemReview),
        (status = 404, description = "No review with that id", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_review(
    _auth: Authorized<UserRole>,
    State(state): State<AppState>,
    Query(IdQuery { id }): Query<IdQuery<i64>>,
) -> Result<Json<MenuItemReview>, AppError> {
    Ok(Json(state.menu_item_reviews.get(&id).await?))
}

/// Update a single menu item review
#[utoipa::path(
    put,
    path = "/api/menuitemreview",
    tag = "Menu Item Reviews",
    params(("id" = i64, Query, description = "id of the review")),
    request_body = MenuItemReview,
    responses(
        (status = 200, description = "The updated review", body = MenuItemReview),
        (status = 404, description = "No review with that id", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn update_review(
    _auth: Authorized<AdminRole>,
    State(state): State<AppState>,
    Query(IdQuery { id }): Query<IdQuery<i64>>,
    Json(incoming): Json<MenuItemReview>,
) -> Result<Json<MenuItemReview>, AppError> {
    Ok(Json(state.menu_item_reviews.update(&id, incoming).await?))
}

/// Delete a menu item review
#[utoipa::path(
    delete,
    path = "/api/menuitemreview",
    tag = "Menu Item Reviews",
    params(("id" = i64, Query, description = "id of the review")),
    responses(
        (status = 200, description = "Deletion confirmed", body = MessageResponse),
        (status = 404, description = "No review with that id", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_review(
    _auth: Authorized<AdminRole>,
    State(state): State<AppState>,
    Query(IdQuery { id }): Query<IdQuery<i64>>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.menu_item_reviews.delete(&id).await?;
    Ok(generic_message(message))
}
