//! Briefing submission and generation orchestration.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use multiplier_core::briefing::{BriefingData, TONE_SUGGESTIONS};
use multiplier_genai::batch::build_content_batch;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/briefings/generate
///
/// Validate the briefing, call the text collaborator, and replace the
/// whole batch with seven fresh Draft items. All-or-nothing: a
/// collaborator error commits no partial batch and any prior batch stays
/// untouched.
pub async fn generate(
    State(state): State<AppState>,
    Json(briefing): Json<BriefingData>,
) -> AppResult<impl IntoResponse> {
    briefing.check()?;

    // Snapshot the settings so the collaborator call holds no lock.
    let (prompts, profile) = {
        let settings = state.settings.read().await;
        (settings.prompts.clone(), settings.profile.clone())
    };

    let response = state
        .genai
        .generate_content(&briefing, &prompts, &profile)
        .await
        .map_err(AppError::TextGeneration)?;

    let batch = build_content_batch(&briefing, response);

    let mut content = state.content.write().await;
    *content = batch.clone();

    tracing::info!(topic = %briefing.topic, items = batch.len(), "Content batch generated");

    Ok(Json(DataResponse { data: batch }))
}

/// GET /api/v1/briefings/tone-suggestions
///
/// The fixed tone-of-voice suggestion list shown next to the tone input.
pub async fn tone_suggestions() -> impl IntoResponse {
    Json(DataResponse {
        data: TONE_SUGGESTIONS,
    })
}
