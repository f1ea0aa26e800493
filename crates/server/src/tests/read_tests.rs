// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{Router, http::StatusCode};
use serde_json::json;

use crate::tests::helpers::{
    create_as_admin, create_test_admission, create_test_app, create_test_block, create_test_cell,
    envelope, get_json, post_json,
};

#[tokio::test]
async fn test_list_facilities_shows_housing_tree() {
    let app: Router = create_test_app();
    let (facility_id, block_id) = create_test_block(&app).await;
    let cell_id: i64 = create_test_cell(&app, block_id, 2).await;
    post_json(
        &app,
        "/prisoners",
        &envelope("officer", create_test_admission(cell_id, "John Doe")),
    )
    .await;

    let (status, body) = get_json(&app, "/facilities").await;

    assert_eq!(status, StatusCode::OK);
    let facility = &body["facilities"][0];
    assert_eq!(facility["facility_id"], facility_id);
    assert_eq!(facility["occupants"], 1);
    assert_eq!(facility["blocks"][0]["cells"][0]["cell_id"], cell_id);
    assert_eq!(facility["blocks"][0]["total_capacity"], 2);
}

#[tokio::test]
async fn test_relocation_preview_takes_capacity_from_query() {
    let app: Router = create_test_app();
    let (_, block_id) = create_test_block(&app).await;
    let crowded: i64 = create_test_cell(&app, block_id, 2).await;
    let spare: i64 = create_test_cell(&app, block_id, 2).await;
    create_as_admin(&app, "/prisoners", create_test_admission(crowded, "John Doe")).await;
    let second: i64 =
        create_as_admin(&app, "/prisoners", create_test_admission(crowded, "Jim Roe")).await;

    let (status, body) = get_json(&app, &format!("/cells/{crowded}/relocation?capacity=1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["placements"],
        json!([{ "prisoner_id": second, "cell_id": spare }])
    );
    let (_, cell) = get_json(&app, &format!("/cells/{crowded}")).await;
    assert_eq!(cell["occupancy"], 2);
}

#[tokio::test]
async fn test_working_hours_from_query() {
    let app: Router = create_test_app();
    let department_id: i64 = create_as_admin(
        &app,
        "/departments",
        json!({ "department_type": "Operations" }),
    )
    .await;
    let staff_id: i64 = create_as_admin(
        &app,
        "/staff",
        json!({
            "name": "Ann Top",
            "salary_cents": 6_100_000,
            "phone": "555-0100",
            "date_of_birth": "1980-07-01",
            "gender": "FEMALE",
            "role": "Captain",
            "department_id": department_id
        }),
    )
    .await;
    let schedule_id: i64 = create_as_admin(
        &app,
        "/schedules",
        json!({
            "staff_id": staff_id,
            "days": ["Saturday", "Sunday"],
            "start": "22:00",
            "end": "23:30"
        }),
    )
    .await;

    let (status, body) = get_json(
        &app,
        &format!("/schedules/{schedule_id}/working_hours?time=22:15"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["working"], true);

    let (status, _) = get_json(
        &app,
        &format!("/schedules/{schedule_id}/working_hours?time=late"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_resources_are_not_found() {
    let app: Router = create_test_app();

    for uri in [
        "/facilities/7",
        "/cells/7",
        "/prisoners/7",
        "/staff/7",
        "/guns/SN-7",
        "/audit/event/7",
    ] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], true);
    }
}
