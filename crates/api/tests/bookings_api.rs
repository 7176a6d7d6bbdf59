//! End-to-end tests for `/api/bookings`: window validation, overlap
//! conflicts, and cancellation.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

fn booking_body(room_id: i64, start: &str, end: &str) -> serde_json::Value {
    json!({
        "room_id": room_id,
        "customer_name": "Kana Singer",
        "customer_email": "kana@example.com",
        "start_time": start,
        "end_time": end,
    })
}

// ---------------------------------------------------------------------------
// Test: create, read back, reschedule, cancel
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn booking_lifecycle(pool: PgPool) {
    let app = common::build_test_app(pool);
    let tenant = common::seed_tenant(&app, "Demo Karaoke", "demo").await["id"]
        .as_i64()
        .unwrap();
    let room = common::seed_room(&app, tenant, "Room 1").await["id"]
        .as_i64()
        .unwrap();

    let response = common::post_json(
        &app,
        &format!("/api/bookings?tenant_id={tenant}"),
        booking_body(room, "2026-09-01T18:00:00Z", "2026-09-01T20:00:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = common::body_json(response).await;
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_i64().unwrap();

    let fetched = common::body_json(
        common::get(&app, &format!("/api/bookings?tenant_id={tenant}&id={id}")).await,
    )
    .await;
    assert_eq!(fetched["data"]["customer_name"], "Kana Singer");

    // Reschedule to a free slot.
    let response = common::put_json(
        &app,
        &format!("/api/bookings?tenant_id={tenant}&id={id}"),
        json!({ "start_time": "2026-09-02T18:00:00Z", "end_time": "2026-09-02T20:00:00Z" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Cancel.
    let response = common::delete(&app, &format!("/api/bookings?tenant_id={tenant}&id={id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["message"], "Booking cancelled");

    let response = common::get(&app, &format!("/api/bookings?tenant_id={tenant}&id={id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: malformed windows and emails never reach the database
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_payloads_are_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let tenant = common::seed_tenant(&app, "Demo Karaoke", "demo").await["id"]
        .as_i64()
        .unwrap();
    let room = common::seed_room(&app, tenant, "Room 1").await["id"]
        .as_i64()
        .unwrap();

    // end before start
    let response = common::post_json(
        &app,
        &format!("/api/bookings?tenant_id={tenant}"),
        booking_body(room, "2026-09-01T20:00:00Z", "2026-09-01T18:00:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // zero-length window
    let response = common::post_json(
        &app,
        &format!("/api/bookings?tenant_id={tenant}"),
        booking_body(room, "2026-09-01T18:00:00Z", "2026-09-01T18:00:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // bad email
    let mut bad_email = booking_body(room, "2026-09-01T18:00:00Z", "2026-09-01T20:00:00Z");
    bad_email["customer_email"] = json!("not-an-email");
    let response = common::post_json(
        &app,
        &format!("/api/bookings?tenant_id={tenant}"),
        bad_email,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
}

// ---------------------------------------------------------------------------
// Test: overlapping slots are a 409, adjacent slots are fine
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn overlap_is_409(pool: PgPool) {
    let app = common::build_test_app(pool);
    let tenant = common::seed_tenant(&app, "Demo Karaoke", "demo").await["id"]
        .as_i64()
        .unwrap();
    let room = common::seed_room(&app, tenant, "Room 1").await["id"]
        .as_i64()
        .unwrap();

    let response = common::post_json(
        &app,
        &format!("/api/bookings?tenant_id={tenant}"),
        booking_body(room, "2026-09-01T18:00:00Z", "2026-09-01T20:00:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = common::post_json(
        &app,
        &format!("/api/bookings?tenant_id={tenant}"),
        booking_body(room, "2026-09-01T19:00:00Z", "2026-09-01T21:00:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = common::body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("already booked"));

    // Half-open windows: starting exactly at the previous end succeeds.
    let response = common::post_json(
        &app,
        &format!("/api/bookings?tenant_id={tenant}"),
        booking_body(room, "2026-09-01T20:00:00Z", "2026-09-01T22:00:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Test: booking a foreign room reads as a missing room
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn foreign_room_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alpha = common::seed_tenant(&app, "Alpha Karaoke", "alpha").await["id"]
        .as_i64()
        .unwrap();
    let beta = common::seed_tenant(&app, "Beta Karaoke", "beta").await["id"]
        .as_i64()
        .unwrap();
    let alpha_room = common::seed_room(&app, alpha, "Alpha Room").await["id"]
        .as_i64()
        .unwrap();

    let response = common::post_json(
        &app,
        &format!("/api/bookings?tenant_id={beta}"),
        booking_body(alpha_room, "2026-09-01T18:00:00Z", "2026-09-01T20:00:00Z"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: list filters by room and window
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_room_and_window(pool: PgPool) {
    let app = common::build_test_app(pool);
    let tenant = common::seed_tenant(&app, "Demo Karaoke", "demo").await["id"]
        .as_i64()
        .unwrap();
    let room = common::seed_room(&app, tenant, "Room 1").await["id"]
        .as_i64()
        .unwrap();

    for day in ["01", "10", "20"] {
        let response = common::post_json(
            &app,
            &format!("/api/bookings?tenant_id={tenant}"),
            booking_body(
                room,
                &format!("2026-09-{day}T18:00:00Z"),
                &format!("2026-09-{day}T20:00:00Z"),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let all =
        common::body_json(common::get(&app, &format!("/api/bookings?tenant_id={tenant}")).await)
            .await;
    assert_eq!(all["data"].as_array().unwrap().len(), 3);

    let ranged = common::body_json(
        common::get(
            &app,
            &format!(
                "/api/bookings?tenant_id={tenant}&room_id={room}\
                 &from=2026-09-05T00:00:00Z&to=2026-09-15T00:00:00Z"
            ),
        )
        .await,
    )
    .await;
    let rows = ranged["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["start_time"], "2026-09-10T18:00:00Z");
}
