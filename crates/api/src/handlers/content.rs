//! Content batch access and the editor commit.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use multiplier_core::content::find_item;
use multiplier_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::handlers::{parse_platform, update_item};
use crate::response::DataResponse;
use crate::state::AppState;

/// Editor commit payload. Absent fields are left unchanged; the client
/// keeps its draft buffer local and only calls this on explicit save.
#[derive(Debug, Deserialize)]
pub struct UpdateContent {
    pub content: Option<String>,
    pub visual_prompt: Option<String>,
}

/// GET /api/v1/content
///
/// The current generation batch (empty before the first generation).
pub async fn list_content(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let content = state.content.read().await;
    Ok(Json(DataResponse {
        data: content.clone(),
    }))
}

/// GET /api/v1/content/{platform}
pub async fn get_content(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> AppResult<impl IntoResponse> {
    let platform = parse_platform(&platform)?;
    let content = state.content.read().await;
    let item = find_item(&content, platform).ok_or(AppError::Core(CoreError::NotFound {
        entity: "ContentItem",
        id: platform.to_string(),
    }))?;

    Ok(Json(DataResponse { data: item.clone() }))
}

/// PUT /api/v1/content/{platform}
///
/// Commit an edit of the text body and/or the visual prompt.
pub async fn update_content(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Json(input): Json<UpdateContent>,
) -> AppResult<impl IntoResponse> {
    let platform = parse_platform(&platform)?;

    let item = update_item(&state, platform, |item| {
        if let Some(content) = input.content {
            item.content = content;
        }
        if let Some(prompt) = input.visual_prompt {
            item.visual_prompt = Some(prompt);
        }
        Ok(())
    })
    .await?;

    tracing::info!(platform = %platform, "Content item updated");

    Ok(Json(DataResponse { data: item }))
}
