use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct HolidayParams {
    pub date: NaiveDate,
}

/// GET /holidays
///
/// List every holiday in ascending order.
pub async fn list_holidays(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let holidays = state.pass.holidays_sorted().await?;

    let count = holidays.len();
    Ok(Json(json!({ "data": holidays, "count": count })))
}

/// PUT /holidays?date=2019-02-18
///
/// Flag a date as a holiday.
pub async fn add_holiday(
    State(state): State<Arc<AppState>>,
    params: Result<Query<HolidayParams>, QueryRejection>,
) -> Result<StatusCode, AppError> {
    let Query(params) = params?;
    state.pass.add_holiday(params.date).await?;
    Ok(StatusCode::NO_CONTENT)
}
