//! Common routes: health, readiness, version and build/storage info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    let Some(pool) = &state.pool else {
        return Ok(Json(ReadyBody {
            status: "ok",
            database: "memory",
        }));
    };
    if sqlx::query("SELECT 1").fetch_optional(pool).await.is_err() {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let storage = if state.pool.is_some() { "postgres" } else { "memory" };
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "storage": storage,
        "schema": state.db_schema,
        "principals": state.tokens.len()
    }))
}

/// Common routes (no state): GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}

/// Common routes plus readiness (DB check) and GET /info, which read the state.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .route("/info", get(info))
        .with_state(state)
        .merge(common_routes())
}
