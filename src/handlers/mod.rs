//! HTTP handlers, one module per resource.

pub mod dining_commons_menu_item;
pub mod menu_item_review;
pub mod organization;
pub mod recommendation_request;
pub mod user;

use serde::Deserialize;

/// `?id=<id>` on get, put and delete.
#[derive(Debug, Deserialize)]
pub struct IdQuery<T> {
    pub id: T,
}
