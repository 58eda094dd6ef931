//! Runtime settings read from the environment (a `.env` file is loaded first by the binary).

use crate::auth::TokenRegistry;
use crate::error::ConfigError;
use std::net::SocketAddr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::InvalidVar {
                var: "STORAGE",
                reason: format!("{} (expected postgres or memory)", other),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub storage: StorageBackend,
    pub database_url: String,
    /// Schema holding the entity tables.
    pub db_schema: String,
    pub db_max_connections: u32,
    pub admin_emails: String,
    pub auth_tokens: String,
    pub body_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Build from any variable source; unset variables take their defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let or = |k: &str, d: &str| get(k).unwrap_or_else(|| d.to_string());
        Ok(AppConfig {
            bind_addr: parse_var("BIND_ADDR", &or("BIND_ADDR", "0.0.0.0:8080"))?,
            storage: or("STORAGE", "postgres").parse()?,
            database_url: or("DATABASE_URL", "postgres://localhost/ucsb"),
            db_schema: or("DB_SCHEMA", "public"),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", &or("DB_MAX_CONNECTIONS", "5"))?,
            admin_emails: or("ADMIN_EMAILS", ""),
            auth_tokens: or("AUTH_TOKENS", ""),
            body_limit: parse_var("REQUEST_BODY_LIMIT", &or("REQUEST_BODY_LIMIT", "1048576"))?,
        })
    }

    pub fn token_registry(&self) -> Result<TokenRegistry, ConfigError> {
        TokenRegistry::parse(&self.auth_tokens, &self.admin_emails)
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidVar {
        var,
        reason: e.to_string(),
    })
}
