//! UCSB API: REST backend for dining commons menu items and reviews, recommendation
//! requests and student organizations.

pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use auth::{Principal, Role, TokenRegistry};
pub use config::{AppConfig, StorageBackend};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use repository::{InMemoryRepository, PgRepository, Repository};
pub use routes::{common_routes, common_routes_with_ready, docs_routes, entity_routes, ApiDoc};
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists};

use axum::{middleware, Router};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// The full application: probes, OpenAPI document and the authenticated resource routes.
pub fn app(state: AppState, body_limit: usize) -> Router {
    let api = entity_routes(state.clone())
        .layer(middleware::from_fn_with_state(state.clone(), extractors::authenticate));
    Router::new()
        .merge(common_routes_with_ready(state))
        .merge(docs_routes())
        .merge(api)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
