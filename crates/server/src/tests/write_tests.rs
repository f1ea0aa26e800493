// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{Router, http::StatusCode};
use serde_json::{Value, json};

use crate::tests::helpers::{
    create_as_admin, create_test_admission, create_test_app, create_test_block, create_test_cell,
    envelope, get_json, post_json,
};

fn create_test_facility() -> Value {
    json!({
        "name": "North Ridge",
        "address": {
            "street": "1 Main Street",
            "city": "Springfield",
            "state": "IL",
            "country": "USA"
        }
    })
}

fn create_test_hire(department_id: i64) -> Value {
    json!({
        "name": "Gus Guard",
        "salary_cents": 5_200_000,
        "phone": "555-0100",
        "date_of_birth": "1985-02-11",
        "gender": "FEMALE",
        "role": "Guard",
        "department_id": department_id
    })
}

#[tokio::test]
async fn test_create_facility_as_admin_succeeds() {
    let app: Router = create_test_app();

    let (status, body) = post_json(
        &app,
        "/facilities",
        &envelope("admin", create_test_facility()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "CreateFacility");
    assert!(body["event_id"].as_i64().unwrap() > 0);
    assert!(body["created_id"].as_i64().is_some());
}

#[tokio::test]
async fn test_officer_cannot_change_structure() {
    let app: Router = create_test_app();

    let (status, _) = post_json(
        &app,
        "/facilities",
        &envelope("officer", create_test_facility()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = get_json(&app, "/facilities").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["facilities"].as_array().unwrap().is_empty());
    let (_, timeline) = get_json(&app, "/audit/timeline").await;
    assert!(timeline.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_role_is_unauthenticated() {
    let app: Router = create_test_app();

    let (status, body) = post_json(
        &app,
        "/facilities",
        &envelope("janitor", create_test_facility()),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_full_cell_is_unprocessable() {
    let app: Router = create_test_app();
    let (_, block_id) = create_test_block(&app).await;
    let cell_id: i64 = create_test_cell(&app, block_id, 1).await;

    let (status, _) = post_json(
        &app,
        "/prisoners",
        &envelope("officer", create_test_admission(cell_id, "John Doe")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(
        &app,
        "/prisoners",
        &envelope("officer", create_test_admission(cell_id, "Jim Roe")),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap().contains("cell_capacity"));
}

#[tokio::test]
async fn test_malformed_date_is_bad_request() {
    let app: Router = create_test_app();
    let (_, block_id) = create_test_block(&app).await;
    let cell_id: i64 = create_test_cell(&app, block_id, 2).await;
    let mut admission: Value = create_test_admission(cell_id, "John Doe");
    admission["date_of_birth"] = json!("20-05-1990");

    let (status, _) = post_json(&app, "/prisoners", &envelope("officer", admission)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_cell_is_not_found() {
    let app: Router = create_test_app();

    let (status, _) = post_json(
        &app,
        "/prisoners",
        &envelope("officer", create_test_admission(404, "John Doe")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_weapon_custody_over_http() {
    let app: Router = create_test_app();
    let security: i64 = create_as_admin(
        &app,
        "/departments",
        json!({ "department_type": "Security" }),
    )
    .await;
    let staff_id: i64 = create_as_admin(&app, "/staff", create_test_hire(security)).await;
    let (status, _) = post_json(
        &app,
        "/guns",
        &envelope(
            "admin",
            json!({ "serial_number": "sn-77", "gun_type": "Pistol", "name": "Glock 17" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let custody: Value = json!({ "serial_number": "SN-77", "staff_id": staff_id });
    let (status, body) =
        post_json(&app, "/guns/assign", &envelope("officer", custody.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["action"], "AssignGun");

    let (_, staff) = get_json(&app, &format!("/staff/{staff_id}")).await;
    assert_eq!(staff["weapons"], json!(["SN-77"]));

    let (status, _) = post_json(&app, "/guns/return", &envelope("officer", custody)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, gun) = get_json(&app, "/guns/sn-77").await;
    assert_eq!(gun["assignments"][0]["returned"], true);
}

#[tokio::test]
async fn test_audit_event_carries_attribution() {
    let app: Router = create_test_app();
    let (_, body) = post_json(
        &app,
        "/facilities",
        &envelope("admin", create_test_facility()),
    )
    .await;
    let event_id: i64 = body["event_id"].as_i64().unwrap();

    let (status, event) = get_json(&app, &format!("/audit/event/{event_id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["actor_id"], "admin-1");
    assert_eq!(event["actor_type"], "admin");
    assert_eq!(event["cause_id"], "test-cause");
    assert_eq!(event["action_name"], "CreateFacility");
}
