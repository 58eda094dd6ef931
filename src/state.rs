//! Shared application state for all routes.

use crate::auth::TokenRegistry;
use crate::entities::{MenuItemReview, RecommendationRequest, UcsbDiningCommonsMenuItem, UcsbOrganization};
use crate::repository::{InMemoryRepository, PgRepository};
use crate::service::CrudService;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// None when running on the in-memory store; readiness then skips the database check.
    pub pool: Option<PgPool>,
    /// Schema holding the entity tables; None on the in-memory store.
    pub db_schema: Option<String>,
    pub tokens: Arc<TokenRegistry>,
    pub menu_item_reviews: CrudService<MenuItemReview>,
    pub dining_commons_menu_items: CrudService<UcsbDiningCommonsMenuItem>,
    pub recommendation_requests: CrudService<RecommendationRequest>,
    pub organizations: CrudService<UcsbOrganization>,
}

impl AppState {
    pub fn postgres(pool: PgPool, schema: &str, tokens: TokenRegistry) -> Self {
        AppState {
            menu_item_reviews: CrudService::new(Arc::new(PgRepository::new(pool.clone(), schema))),
            dining_commons_menu_items: CrudService::new(Arc::new(PgRepository::new(pool.clone(), schema))),
            recommendation_requests: CrudService::new(Arc::new(PgRepository::new(pool.clone(), schema))),
            organizations: CrudService::new(Arc::new(PgRepository::new(pool.clone(), schema))),
            pool: Some(pool),
            db_schema: Some(schema.to_string()),
            tokens: Arc::new(tokens),
        }
    }

    pub fn in_memory(tokens: TokenRegistry) -> Self {
        AppState {
            pool: None,
            db_schema: None,
            tokens: Arc::new(tokens),
            menu_item_reviews: CrudService::new(Arc::new(InMemoryRepository::new())),
            dining_commons_menu_items: CrudService::new(Arc::new(InMemoryRepository::new())),
            recommendation_requests: CrudService::new(Arc::new(InMemoryRepository::new())),
            organizations: CrudService::new(Arc::new(InMemoryRepository::new())),
        }
    }
}
