//! Principals, roles and the bearer-token registry they are resolved from.

use crate::error::ConfigError;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use utoipa::ToSchema;

/// Authorization level gating an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

/// The authenticated caller.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Principal {
    pub email: String,
    /// Always contains `Role::User`; admins also carry `Role::Admin`.
    pub roles: Vec<Role>,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Maps bearer tokens to principals. Every known principal is a user; emails listed as
/// admins are also admins.
#[derive(Clone, Debug, Default)]
pub struct TokenRegistry {
    by_token: HashMap<String, Principal>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `token=email` pairs (comma separated) and a comma separated admin email list.
    pub fn parse(tokens: &str, admin_emails: &str) -> Result<Self, ConfigError> {
        let admins: HashSet<String> = admin_emails
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        let mut registry = TokenRegistry::new();
        for entry in tokens.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (token, email) = entry
                .split_once('=')
                .map(|(t, e)| (t.trim(), e.trim()))
                .filter(|(t, e)| !t.is_empty() && !e.is_empty())
                .ok_or_else(|| ConfigError::MalformedToken(entry.to_string()))?;
            let is_admin = admins.contains(&email.to_lowercase());
            registry.insert(token, email, is_admin);
        }
        Ok(registry)
    }

    pub fn insert(&mut self, token: &str, email: &str, admin: bool) {
        let mut roles = vec![Role::User];
        if admin {
            roles.push(Role::Admin);
        }
        self.by_token.insert(
            token.to_string(),
            Principal {
                email: email.to_string(),
                roles,
            },
        );
    }

    pub fn resolve(&self, token: &str) -> Option<&Principal> {
        self.by_token.get(token)
    }

    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }
}
