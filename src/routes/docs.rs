//! OpenAPI document for every resource operation, served at `/v3/api-docs`.

use crate::auth::{Principal, Role};
use crate::entities::{MenuItemReview, RecommendationRequest, UcsbDiningCommonsMenuItem, UcsbOrganization};
use crate::error::ErrorResponse;
use crate::handlers::{dining_commons_menu_item, menu_item_review, organization, recommendation_request, user};
use crate::response::MessageResponse;
use axum::{routing::get, Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        user::current_user,
        menu_item_review::all_reviews,
        menu_item_review::post_review,
        menu_item_review::get_review,
        menu_item_review::update_review,
        menu_item_review::delete_review,
        dining_commons_menu_item::all_menu_items,
        dining_commons_menu_item::post_menu_item,
        dining_commons_menu_item::get_menu_item,
        recommendation_request::all_requests,
        recommendation_request::post_request,
        recommendation_request::get_request,
        recommendation_request::update_request,
        recommendation_request::delete_request,
        organization::all_organizations,
        organization::post_organization,
        organization::get_organization,
        organization::update_organization,
        organization::delete_organization,
    ),
    components(schemas(
        MenuItemReview,
        UcsbDiningCommonsMenuItem,
        RecommendationRequest,
        UcsbOrganization,
        Principal,
        Role,
        ErrorResponse,
        MessageResponse,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "Menu Item Reviews", description = "Reviews of dining commons menu items"),
        (name = "UCSBDiningCommonsMenuItem", description = "Dishes served at the dining commons"),
        (name = "Recommendation Requests", description = "Requests for letters of recommendation"),
        (name = "UCSBOrganization", description = "Student organizations"),
        (name = "Current User", description = "The authenticated caller"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn docs_routes() -> Router {
    Router::new().route("/v3/api-docs", get(api_docs))
}
