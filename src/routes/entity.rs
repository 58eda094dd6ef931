//! Entity CRUD routes. Each resource exposes `/all`, `/post` and `?id=` on its base path;
//! the dining commons menu items have no put or delete.

use crate::handlers::{dining_commons_menu_item, menu_item_review, organization, recommendation_request, user};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/currentUser", get(user::current_user))
        .route("/api/menuitemreview/all", get(menu_item_review::all_reviews))
        .route("/api/menuitemreview/post", post(menu_item_review::post_review))
        .route(
            "/api/menuitemreview",
            get(menu_item_review::get_review)
                .put(menu_item_review::update_review)
                .delete(menu_item_review::delete_review),
        )
        .route(
            "/api/ucsbdiningcommonsmenuitem/all",
            get(dining_commons_menu_item::all_menu_items),
        )
        .route(
            "/api/ucsbdiningcommonsmenuitem/post",
            post(dining_commons_menu_item::post_menu_item),
        )
        .route(
            "/api/ucsbdiningcommonsmenuitem",
            get(dining_commons_menu_item::get_menu_item),
        )
        .route(
            "/api/recommendationrequests/all",
            get(recommendation_request::all_requests),
        )
        .route(
            "/api/recommendationrequests/post",
            post(recommendation_request::post_request),
        )
        .route(
            "/api/recommendationrequests",
            get(recommendation_request::get_request)
                .put(recommendation_request::update_request)
                .delete(recommendation_request::delete_request),
        )
        .route("/api/UCSBOrganization/all", get(organization::all_organizations))
        .route("/api/UCSBOrganization/post", post(organization::post_organization))
        .route(
            "/api/UCSBOrganization",
            get(organization::get_organization)
                .put(organization::update_organization)
                .delete(organization::delete_organization),
        )
        .with_state(state)
}
