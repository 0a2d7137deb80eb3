#![allow(dead_code)]

//! Test infrastructure for kb-server API tests

use kb_config::{ApiConfig, ValidationConfig};
use kb_core::{Board, NewBoard, NewCard, NewColumn, NewUser};
use kb_db::{MemoryStore, Repositories};
use kb_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub struct TestApp {
    pub store: MemoryStore,
    pub repos: Repositories,
    pub router: Router,
}

/// Router over an empty store
pub fn create_test_app() -> TestApp {
    let store = MemoryStore::new();
    let state = AppState::new(&store, ApiConfig::default(), ValidationConfig::default());
    TestApp {
        repos: Repositories::in_memory(&store),
        router: build_router(state),
        store,
    }
}

/// Board with "To Do" = [X, Y] and "Doing" = []
pub async fn create_test_board(app: &TestApp) -> Board {
    app.repos
        .boards
        .create(NewBoard {
            columns: vec![
                NewColumn {
                    name: "To Do".to_string(),
                    cards: vec![NewCard::titled("X"), NewCard::titled("Y")],
                },
                NewColumn::named("Doing"),
            ],
            ..NewBoard::named("Sprint Board")
        })
        .await
        .unwrap()
}

pub async fn create_test_user(app: &TestApp, name: &str) -> kb_core::User {
    app.repos
        .users
        .create(NewUser {
            name: name.to_string(),
            ..NewUser::default()
        })
        .await
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    raw_json(method, uri, &body.to_string())
}

pub fn raw_json(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request and decode the JSON body
pub async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

pub async fn activity_count(app: &TestApp) -> usize {
    app.repos.activities.find_all().await.unwrap().len()
}
