//! Lifecycle transitions: approve, schedule, unschedule.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use multiplier_core::error::CoreError;
use multiplier_core::lifecycle;

use crate::error::AppResult;
use crate::handlers::{parse_platform, update_item};
use crate::response::DataResponse;
use crate::state::AppState;

/// Schedule payload. An empty `date` unschedules; `time` is only touched
/// when passed.
#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub date: String,
    pub time: Option<String>,
}

/// POST /api/v1/content/{platform}/approve
pub async fn approve(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> AppResult<impl IntoResponse> {
    let platform = parse_platform(&platform)?;
    let item = update_item(&state, platform, lifecycle::approve).await?;

    tracing::info!(platform = %platform, "Content item approved");

    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/content/{platform}/schedule
pub async fn schedule(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Json(input): Json<ScheduleRequest>,
) -> AppResult<impl IntoResponse> {
    let platform = parse_platform(&platform)?;
    check_day_key(&input.date)?;

    let item = update_item(&state, platform, |item| {
        lifecycle::schedule(item, &input.date, input.time.as_deref())
    })
    .await?;

    match &item.scheduled_date {
        Some(date) => tracing::info!(platform = %platform, date = %date, "Content item scheduled"),
        None => tracing::info!(platform = %platform, "Content item unscheduled"),
    }

    Ok(Json(DataResponse { data: item }))
}

/// Validate that a non-empty date is a well-formed `YYYY-MM-DD` day key.
/// The empty string stays legal: it is the unschedule sentinel.
pub(crate) fn check_day_key(date: &str) -> Result<(), CoreError> {
    if date.is_empty() {
        return Ok(());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| CoreError::Validation(format!("Invalid calendar day '{date}'")))
}
