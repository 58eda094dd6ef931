//! Response bodies shared by the resource handlers.

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation returned by deletes, e.g. `{"message": "MenuItemReview with id 15 deleted"}`.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

pub fn generic_message(message: String) -> Json<MessageResponse> {
    Json(MessageResponse { message })
}
