//! `/api/ucsbdiningcommonsmenuitem`: list, create and get only. Menu items are not edited or
//! deleted through the API.

use super::IdQuery;
use crate::entities::{UcsbDiningCommonsMenuItem, UcsbDiningCommonsMenuItemParams};
use crate::error::{AppError, ErrorResponse};
use crate::extractors::{AdminRole, Authorized, UserRole};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

/// List all UCSB Dining Commons Menu Items
#[utoipa::path(
    get,
    path = "/api/ucsbdiningcommonsmenuitem/all",
    tag = "UCSBDiningCommonsMenuItem",
    responses(
        (status = 200, description = "Every menu item", body = [UcsbDiningCommonsMenuItem]),
        (status = 403, description = "Not signed in", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn all_menu_items(
    _auth: Authorized<UserRole>,
    State(state): State<AppState>,
) -> Result<Json<Vec<UcsbDiningCommonsMenuItem>>, AppError> {
    Ok(Json(state.dining_commons_menu_items.list().await?))
}

/// Create a new UCSB Dining Commons Menu Item
#[utoipa::path(
    post,
    path = "/api/ucsbdiningcommonsmenuitem/post",
    tag = "UCSBDiningCommonsMenuItem",
    params(UcsbDiningCommonsMenuItemParams),
    responses(
        (status = 200, description = "The saved menu item", body = UcsbDiningCommonsMenuItem),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn post_menu_item(
    _auth: Authorized<AdminRole>,
    State(state): State<AppState>,
    Query(params): Query<UcsbDiningCommonsMenuItemParams>,
) -> Result<Json<UcsbDiningCommonsMenuItem>, AppError> {
    let saved = state.dining_commons_menu_items.create(params.into()).await?;
    Ok(Json(saved))
}

/// Get a single menu item
#[utoipa::path(
    get,
    path = "/api/ucsbdiningcommonsmenuitem",
    tag = "UCSBDiningCommonsMenuItem",
    params(("id" = i64, Query, description = "id of the menu item")),
    responses(
        (status = 200, description = "The menu item", body = UcsbDiningCommonsMenuItem),
        (status = 404, description = "No menu item with that id", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_menu_item(
    _auth: Authorized<UserRole>,
    State(state): State<AppState>,
    Query(IdQuery { id }): Query<IdQuery<i64>>,
) -> Result<Json<UcsbDiningCommonsMenuItem>, AppError> {
    Ok(Json(state.dining_commons_menu_items.get(&id).await?))
}
