//! HTTP front end for the lift pass pricing store.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::http::header::{HeaderValue, CONTENT_TYPE};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the router with all routes and middleware.
pub fn app(pass: lift_pass::AsyncLiftPass) -> Router {
    let state = Arc::new(AppState { pass });

    Router::new()
        .route("/prices", get(routes::prices::get_price).put(routes::prices::upsert_price))
        .route(
            "/holidays",
            get(routes::holidays::list_holidays).put(routes::holidays::add_holiday),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
