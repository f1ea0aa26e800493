// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;
use warden_persistence::Persistence;

use crate::{AppState, build_router};

/// Builds a router over a fresh in-memory database.
pub fn create_test_app() -> Router {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    build_router(AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    })
}

/// Adds the attribution fields to a request body.
pub fn envelope(actor_role: &str, mut body: Value) -> Value {
    let fields = body.as_object_mut().unwrap();
    fields.insert(String::from("actor_id"), json!(format!("{actor_role}-1")));
    fields.insert(String::from("actor_role"), json!(actor_role));
    fields.insert(String::from("cause_id"), json!("test-cause"));
    fields.insert(String::from("cause_description"), json!("Test request"));
    body
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap(),
    )
    .await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// Posts as admin and returns the created identifier.
pub async fn create_as_admin(app: &Router, uri: &str, body: Value) -> i64 {
    let (status, response) = post_json(app, uri, &envelope("admin", body)).await;
    assert_eq!(status, StatusCode::OK, "{response}");
    response["created_id"].as_i64().unwrap()
}

/// Creates a facility with one block and returns `(facility_id, block_id)`.
pub async fn create_test_block(app: &Router) -> (i64, i64) {
    let facility_id: i64 = create_as_admin(
        app,
        "/facilities",
        json!({
            "name": "North Ridge",
            "address": {
                "street": "1 Main Street",
                "city": "Springfield",
                "state": "IL",
                "country": "USA"
            }
        }),
    )
    .await;
    let block_id: i64 = create_as_admin(
        app,
        "/blocks",
        json!({ "facility_id": facility_id, "block_type": "General Population" }),
    )
    .await;
    (facility_id, block_id)
}

pub async fn create_test_cell(app: &Router, block_id: i64, capacity: u32) -> i64 {
    create_as_admin(
        app,
        "/cells",
        json!({ "block_id": block_id, "cell_type": "Standard", "capacity": capacity }),
    )
    .await
}

pub fn create_test_admission(cell_id: i64, name: &str) -> Value {
    json!({
        "cell_id": cell_id,
        "name": name,
        "date_of_birth": "1990-05-20",
        "sentence_start": "2024-03-01",
        "sentence_end": "2030-03-01",
        "gender": "MALE"
    })
}
