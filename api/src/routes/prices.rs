use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::NaiveDate;
use lift_pass::PriceQuote;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UpsertPriceParams {
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub cost: i64,
}

#[derive(Deserialize)]
pub struct QuoteParams {
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub age: Option<i32>,
    pub date: Option<NaiveDate>,
}

/// PUT /prices?type=1jour&cost=35
///
/// Insert or overwrite the base cost of a ticket type.
pub async fn upsert_price(
    State(state): State<Arc<AppState>>,
    params: Result<Query<UpsertPriceParams>, QueryRejection>,
) -> Result<StatusCode, AppError> {
    let Query(params) = params?;
    state.pass.set_cost(&params.ticket_type, params.cost).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /prices?type=1jour&age=20&date=2019-02-11
///
/// Price a ticket from its stored base cost and the holiday calendar.
pub async fn get_price(
    State(state): State<Arc<AppState>>,
    params: Result<Query<QuoteParams>, QueryRejection>,
) -> Result<Json<PriceQuote>, AppError> {
    let Query(params) = params?;
    let quote = state
        .pass
        .quote(&params.ticket_type, params.age, params.date)
        .await?;
    Ok(Json(quote))
}
