//! Server binary: reads settings from the environment, prepares storage, serves the API.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use ucsb_api::{apply_migrations, connect, AppConfig, AppState, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ucsb_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let tokens = config.token_registry()?;
    if tokens.is_empty() {
        tracing::warn!("AUTH_TOKENS is empty; every /api route will answer 403");
    }

    let state = match config.storage {
        StorageBackend::Postgres => {
            let pool = connect(&config).await?;
            apply_migrations(&pool, &config.db_schema).await?;
            AppState::postgres(pool, &config.db_schema, tokens)
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage; data is lost on restart");
            AppState::in_memory(tokens)
        }
    };

    let app = ucsb_api::app(state, config.body_limit);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
