use crate::auth::Principal;
use crate::error::ErrorResponse;
use crate::extractors::{Authorized, UserRole};
use axum::Json;

/// The signed-in principal
#[utoipa::path(
    get,
    path = "/api/currentUser",
    tag = "Current User",
    responses(
        (status = 200, description = "Email and roles of the caller", body = Principal),
        (status = 403, description = "Not signed in", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn current_user(auth: Authorized<UserRole>) -> Json<Principal> {
    Json(auth.principal().clone())
}
