//! Resolve the caller from `Authorization: Bearer <token>` and gate handlers by role.

use crate::auth::{Principal, Role};
use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::marker::PhantomData;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Middleware: look up the bearer token and store the principal, if any, in request extensions.
/// Unknown or missing tokens leave the request anonymous; the role guards reject it later.
pub async fn authenticate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let principal = bearer_token(request.headers()).and_then(|t| state.tokens.resolve(t).cloned());
    if let Some(p) = principal {
        request.extensions_mut().insert(p);
    }
    next.run(request).await
}

/// A role an endpoint requires.
pub trait RoleRequirement: Send + Sync + 'static {
    const ROLE: Role;
}

pub struct UserRole;
pub struct AdminRole;

impl RoleRequirement for UserRole {
    const ROLE: Role = Role::User;
}

impl RoleRequirement for AdminRole {
    const ROLE: Role = Role::Admin;
}

/// Extractor that succeeds only for a principal holding `R::ROLE`; otherwise 403.
/// List it before body and query extractors so denial wins over malformed input.
pub struct Authorized<R: RoleRequirement>(pub Principal, PhantomData<R>);

impl<R: RoleRequirement> Authorized<R> {
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

#[async_trait]
impl<S, R> FromRequestParts<S> for Authorized<R>
where
    S: Send + Sync,
    R: RoleRequirement,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Principal>() {
            Some(p) if p.has_role(R::ROLE) => Ok(Authorized(p.clone(), PhantomData)),
            Some(p) => {
                tracing::warn!(email = %p.email, required = ?R::ROLE, path = %parts.uri.path(), "access denied");
                Err(AppError::AccessDenied)
            }
            None => {
                tracing::debug!(path = %parts.uri.path(), "anonymous request denied");
                Err(AppError::AccessDenied)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_requires_scheme() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
        assert_eq!(bearer_token(&headers), Some("abc"));
    }
}
