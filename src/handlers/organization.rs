//! `/api/UCSBOrganization`: full CRUD over student organizations, addressed by org code.

use super::IdQuery;
use crate::entities::{UcsbOrganization, UcsbOrganizationParams};
use crate::error::{AppError, ErrorResponse};
use crate::extractors::{AdminRole, Authorized, UserRole};
use crate::response::{generic_message, MessageResponse};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

/// List all UCSB organizations
#[utoipa::path(
    get,
    path = "/api/UCSBOrganization/all",
    tag = "UCSBOrganization",
    responses(
        (status = 200, description = "Every organization", body = [UcsbOrganization]),
        (status = 403, description = "Not signed in", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn all_organizations(
    _auth: Authorized<UserRole>,
    State(state): State<AppState>,
) -> Result<Json<Vec<UcsbOrganization>>, AppError> {
    Ok(Json(state.organizations.list().await?))
}

/// Create a new organization. Posting an existing org code replaces that organization.
#[utoipa::path(
    post,
    path = "/api/UCSBOrganization/post",
    tag = "UCSBOrganization",
    params(UcsbOrganizationParams),
    responses(
        (status = 200, description = "The saved organization", body = UcsbOrganization),
        (status = 403, description = "Admin role required", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn post_organization(
    _auth: Authorized<AdminRole>,
    State(state): State<AppState>,
    Query(params): Query<UcsbOrganizationParams>,
) -> Result<Json<UcsbOrganization>, AppError> {
    let saved = state.organizations.create(params.into()).await?;
    Ok(Json(saved))
}

/// Get a single organization
#[utoipa::path(
    get,
    path = "/api/UCSBOrganization",
    tag = "UCSBOrganization",
    params(("id" = String, Query, description = "org code")),
    responses(
        (status = 200, description = "The organization", body = UcsbOrganization),
        (status = 404, description = "No organization with that code", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn get_organization(
    _auth: Authorized<UserRole>,
    State(state): State<AppState>,
    Query(IdQuery { id }): Query<IdQuery<String>>,
) -> Result<Json<UcsbOrganization>, AppError> {
    Ok(Json(state.organizations.get(&id).await?))
}

/// Update a single organization
#[utoipa::path(
    put,
    path = "/api/UCSBOrganization",
    tag = "UCSBOrganization",
    params(("id" = String, Query, description = "org code")),
    request_body = UcsbOrganization,
    responses(
        (status = 200, description = "The updated organization", body = UcsbOrganization),
        (status = 404, description = "No organization with that code", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn update_organization(
    _auth: Authorized<AdminRole>,
    State(state): State<AppState>,
    Query(IdQuery { id }): Query<IdQuery<String>>,
    Json(incoming): Json<UcsbOrganization>,
) -> Result<Json<UcsbOrganization>, AppError> {
    Ok(Json(state.organizations.update(&id, incoming).await?))
}

/// Delete an organization
#[utoipa::path(
    delete,
    path = "/api/UCSBOrganization",
    tag = "UCSBOrganization",
    params(("id" = String, Query, description = "org code")),
    responses(
        (status = 200, description = "Deletion confirmed", body = MessageResponse),
        (status = 404, description = "No organization with that code", body = ErrorResponse)
    ),
    security(("bearer" = []))
)]
pub async fn delete_organization(
    _auth: Authorized<AdminRole>,
    State(state): State<AppState>,
    Query(IdQuery { id }): Query<IdQuery<String>>,
) -> Result<Json<MessageResponse>, AppError> {
    let message = state.organizations.delete(&id).await?;
    Ok(generic_message(message))
}
