//! The 7-day calendar board and the drop-onto-a-day contract.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use multiplier_core::calendar::{build_board, DEFAULT_SCHEDULE_TIME};
use multiplier_core::lifecycle;
use multiplier_core::platform::Platform;

use crate::error::AppResult;
use crate::handlers::{lifecycle::check_day_key, update_item};
use crate::response::DataResponse;
use crate::state::AppState;

/// Drop payload: which item was dragged onto the day.
#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub platform: Platform,
}

/// GET /api/v1/calendar
///
/// The board for the 7-day window starting today: one column per day plus
/// the unscheduled pool.
pub async fn board(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let content = state.content.read().await;
    let today = chrono::Local::now().date_naive();

    Ok(Json(DataResponse {
        data: build_board(&content, today),
    }))
}

/// POST /api/v1/calendar/{date}/assign
///
/// The drop contract: schedule the dragged item on this day, assigning the
/// default time when the item never got one.
pub async fn assign(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(input): Json<AssignRequest>,
) -> AppResult<impl IntoResponse> {
    if date.is_empty() {
        return Err(multiplier_core::CoreError::Validation(
            "Assign requires a calendar day".to_string(),
        )
        .into());
    }
    check_day_key(&date)?;

    let item = update_item(&state, input.platform, |item| {
        let time = item
            .scheduled_time
            .is_none()
            .then_some(DEFAULT_SCHEDULE_TIME);
        lifecycle::schedule(item, &date, time)
    })
    .await?;

    tracing::info!(platform = %input.platform, date = %date, "Item dropped onto calendar day");

    Ok(Json(DataResponse { data: item }))
}
