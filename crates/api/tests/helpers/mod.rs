#![allow(dead_code)]

mod mock_name_table;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tabledns_api::{create_api_routes, AppState};
use tabledns_application::use_cases::{ListNamesUseCase, UpsertNameUseCase};
use tower::ServiceExt;

pub use mock_name_table::MockNameTable;

pub fn create_test_app(table: &MockNameTable) -> Router {
    let shared = Arc::new(table.clone());
    let state = AppState {
        upsert_name: Arc::new(UpsertNameUseCase::new(shared.clone())),
        list_names: Arc::new(ListNamesUseCase::new(shared)),
    };
    create_api_routes(state)
}

pub async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
