#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt;
use ucsb_api::{AppState, TokenRegistry};

pub const USER_TOKEN: &str = "user-token";
pub const ADMIN_TOKEN: &str = "admin-token";

/// In-memory state with one regular user and one admin.
pub fn state() -> AppState {
    let mut tokens = TokenRegistry::new();
    tokens.insert(USER_TOKEN, "user@ucsb.edu", false);
    tokens.insert(ADMIN_TOKEN, "admin@ucsb.edu", true);
    AppState::in_memory(tokens)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

pub async fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    token: Option<&str>,
    json_body: Option<String>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    let body = match json_body {
        Some(b) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(b)
        }
        None => Body::empty(),
    };
    let response = ucsb_api::app(state.clone(), 1 << 20)
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(state: &AppState, uri: &str, token: Option<&str>) -> TestResponse {
    send(state, Method::GET, uri, token, None).await
}

pub async fn post(state: &AppState, uri: &str, token: Option<&str>) -> TestResponse {
    send(state, Method::POST, uri, token, None).await
}

pub async fn put(state: &AppState, uri: &str, token: Option<&str>, body: String) -> TestResponse {
    send(state, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(state: &AppState, uri: &str, token: Option<&str>) -> TestResponse {
    send(state, Method::DELETE, uri, token, None).await
}
