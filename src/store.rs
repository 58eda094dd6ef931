//! Database bootstrap: create the database and schema, open the pool.

use crate::config::AppConfig;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::PgPoolOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url).map_err(|e| ConfigError::InvalidVar {
        var: "DATABASE_URL",
        reason: e.to_string(),
    })?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Create the schema holding the entity tables if it does not exist.
pub async fn ensure_schema(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;
    Ok(())
}

/// Create the database if needed and open a bounded pool.
pub async fn connect(config: &AppConfig) -> Result<PgPool, AppError> {
    ensure_database_exists(&config.database_url).await?;
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Split `scheme://authority/dbname?query` into an admin URL on the `postgres` database and
/// the database name. A URL without a database path is rejected.
fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let invalid = |reason: &str| ConfigError::InvalidVar {
        var: "DATABASE_URL",
        reason: reason.to_string(),
    };
    let (scheme, rest) = url.split_once("://").ok_or_else(|| invalid("missing scheme"))?;
    let (authority, path_and_query) = rest
        .split_once('/')
        .ok_or_else(|| invalid("no database path"))?;
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    if authority.is_empty() || db_name.is_empty() {
        return Err(invalid("no database path").into());
    }
    let admin_url = format!("{}://{}/postgres", scheme, authority);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
