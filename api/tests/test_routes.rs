//! Route tests driving the router in-process with `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use lift_pass::AsyncLiftPass;
use serde_json::Value;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Router over an in-memory store holding the default seed data
/// (1jour = 35, night = 19, holidays 2019-02-18 / 02-25 / 03-04).
async fn seeded_app() -> Router {
    lift_pass_api::app(seeded_pass().await)
}

async fn seeded_pass() -> AsyncLiftPass {
    AsyncLiftPass::builder()
        .in_memory()
        .seed_defaults(true)
        .build()
        .await
        .unwrap()
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get_cost(app: &Router, uri: &str) -> i64 {
    let (status, body) = send(app, Method::GET, uri).await;
    assert_eq!(status, StatusCode::OK, "{uri}: {body}");
    body["cost"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// GET /prices
// ---------------------------------------------------------------------------

#[tokio::test]
async fn day_pass_without_age_is_full_price() {
    let app = seeded_app().await;
    assert_eq!(get_cost(&app, "/prices?type=1jour").await, 35);
}

#[tokio::test]
async fn infants_ride_free() {
    let app = seeded_app().await;
    assert_eq!(get_cost(&app, "/prices?type=1jour&age=5").await, 0);
    assert_eq!(get_cost(&app, "/prices?type=night&age=5").await, 0);
}

#[tokio::test]
async fn children_get_thirty_percent_off_day_pass() {
    let app = seeded_app().await;
    // 35 * 0.7 = 24.5
    assert_eq!(get_cost(&app, "/prices?type=1jour&age=6").await, 25);
}

#[tokio::test]
async fn seniors_get_age_discount() {
    let app = seeded_app().await;
    // 35 * 0.75 = 26.25, 19 * 0.4 = 7.6
    assert_eq!(get_cost(&app, "/prices?type=1jour&age=65").await, 27);
    assert_eq!(get_cost(&app, "/prices?type=night&age=65").await, 8);
}

#[tokio::test]
async fn monday_discount_outside_holidays() {
    let app = seeded_app().await;
    // 35 * 0.65 = 22.75
    assert_eq!(get_cost(&app, "/prices?type=1jour&age=20&date=2019-02-11").await, 23);
    assert_eq!(get_cost(&app, "/prices?type=1jour&age=20&date=2019-02-18").await, 35);
    assert_eq!(get_cost(&app, "/prices?type=night&age=20&date=2019-02-11").await, 19);
}

#[tokio::test]
async fn unknown_type_is_not_found() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/prices?type=2jours").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("2jours"));
}

#[tokio::test]
async fn type_without_schedule_is_not_found() {
    let app = seeded_app().await;
    let (status, _) = send(&app, Method::PUT, "/prices?type=season&cost=500").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, "/prices?type=season").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["cost"].is_null());
}

#[tokio::test]
async fn malformed_queries_are_bad_requests() {
    let app = seeded_app().await;
    for uri in [
        "/prices",
        "/prices?type=1jour&age=abc",
        "/prices?type=1jour&date=2019-13-45",
        "/prices?type=1jour&age=-3",
    ] {
        let (status, body) = send(&app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn responses_are_json() {
    let app = seeded_app().await;
    let request = Request::builder()
        .uri("/prices?type=night")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()["content-type"], "application/json");
}

#[tokio::test]
async fn prices_still_served_after_a_panicked_operation() {
    let pass = seeded_pass().await;
    let app = lift_pass_api::app(pass.clone());

    let failed = pass
        .run(|_| -> lift_pass::Result<()> { panic!("operation failed mid-lock") })
        .await;
    assert!(failed.is_err());

    for _ in 0..2 {
        assert_eq!(get_cost(&app, "/prices?type=1jour&age=20").await, 35);
    }
    let (status, _) = send(&app, Method::PUT, "/prices?type=night&cost=21").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// PUT /prices
// ---------------------------------------------------------------------------

#[tokio::test]
async fn put_then_get_uses_new_base_price() {
    let app = seeded_app().await;
    let (status, _) = send(&app, Method::PUT, "/prices?type=1jour&cost=50").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(get_cost(&app, "/prices?type=1jour").await, 50);
}

#[tokio::test]
async fn put_rejects_negative_and_missing_cost() {
    let app = seeded_app().await;
    let (status, _) = send(&app, Method::PUT, "/prices?type=1jour&cost=-5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PUT, "/prices?type=1jour").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(get_cost(&app, "/prices?type=1jour").await, 35);
}

// ---------------------------------------------------------------------------
// /holidays
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_holidays_returns_seeded_dates() {
    let app = seeded_app().await;
    let (status, body) = send(&app, Method::GET, "/holidays").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["data"][0], "2019-02-18");
}

#[tokio::test]
async fn added_holiday_withdraws_monday_discount() {
    let app = seeded_app().await;
    let (status, _) = send(&app, Method::PUT, "/holidays?date=2019-02-11").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert_eq!(get_cost(&app, "/prices?type=1jour&age=20&date=2019-02-11").await, 35);
}

#[tokio::test]
async fn add_holiday_rejects_bad_dates() {
    let app = seeded_app().await;
    let (status, _) = send(&app, Method::PUT, "/holidays?date=tomorrow").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
