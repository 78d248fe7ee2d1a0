//! Visual handling: generation, upload, candidate selection, transfer,
//! and the global clipboard.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use multiplier_core::error::CoreError;
use multiplier_core::image::{self, ImageTransfer};

use crate::error::{AppError, AppResult};
use crate::handlers::{parse_platform, update_item};
use crate::response::DataResponse;
use crate::state::AppState;

/// Image generation payload. When `prompt` is present it is committed as
/// the item's visual prompt before the call (the prompt field is always
/// live, independent of the text edit mode).
#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: Option<String>,
}

/// Payload carrying a single image reference (upload, select, copy).
#[derive(Debug, Deserialize)]
pub struct ImageRef {
    pub image: String,
}

/// POST /api/v1/content/{platform}/image/generate
///
/// Request candidate images from the image collaborator. Only one image
/// generation may be in flight at a time; a second request is rejected
/// with a conflict while the first is pending. The in-flight marker is
/// cleared on every path.
pub async fn generate(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Json(input): Json<GenerateImageRequest>,
) -> AppResult<impl IntoResponse> {
    let platform = parse_platform(&platform)?;

    // Commit a live prompt edit and resolve the prompt to use.
    let prompt = {
        let mut content = state.content.write().await;
        let item = multiplier_core::content::find_item_mut(&mut content, platform).ok_or(
            CoreError::NotFound {
                entity: "ContentItem",
                id: platform.to_string(),
            },
        )?;
        if let Some(p) = input.prompt {
            item.visual_prompt = Some(p);
        }
        item.visual_prompt.clone().ok_or_else(|| {
            CoreError::Validation("No visual prompt set for this item".to_string())
        })?
    };

    // Claim the single in-flight slot.
    {
        let mut in_flight = state.image_in_flight.write().await;
        if let Some(busy) = *in_flight {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Image generation already in flight for {busy}"
            ))));
        }
        *in_flight = Some(platform);
    }

    tracing::info!(platform = %platform, "Requesting image candidates");
    let result = state.genai.generate_images(&prompt).await;

    // Release the slot on success, failure, and error alike.
    *state.image_in_flight.write().await = None;

    let candidates = result.map_err(AppError::ImageGeneration)?;
    let count = candidates.len();

    let item = update_item(&state, platform, |item| {
        image::store_generated(item, candidates)
    })
    .await?;

    tracing::info!(platform = %platform, count, "Image candidates stored");

    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/content/{platform}/image/upload
///
/// Replace the item's visuals with a manually uploaded data-URI image.
pub async fn upload(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Json(input): Json<ImageRef>,
) -> AppResult<impl IntoResponse> {
    let platform = parse_platform(&platform)?;
    let item = update_item(&state, platform, |item| {
        image::replace_with_upload(item, &input.image)
    })
    .await?;

    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/content/{platform}/image/select
///
/// Make an existing candidate the active image.
pub async fn select(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Json(input): Json<ImageRef>,
) -> AppResult<impl IntoResponse> {
    let platform = parse_platform(&platform)?;
    let item = update_item(&state, platform, |item| {
        image::select_candidate(item, &input.image)
    })
    .await?;

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/content/{platform}/image
///
/// Remove the active image; the candidate list goes with it.
pub async fn remove(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> AppResult<impl IntoResponse> {
    let platform = parse_platform(&platform)?;
    update_item(&state, platform, |item| {
        image::clear_image(item);
        Ok(())
    })
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/content/{platform}/image/transfer
///
/// Produce the transfer payload for a drag started on this item.
pub async fn transfer_out(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> AppResult<impl IntoResponse> {
    let platform = parse_platform(&platform)?;
    let content = state.content.read().await;
    let item = multiplier_core::content::find_item(&content, platform).ok_or(
        CoreError::NotFound {
            entity: "ContentItem",
            id: platform.to_string(),
        },
    )?;

    let payload = ImageTransfer::from_item(item).ok_or(AppError::Core(CoreError::NotFound {
        entity: "Image",
        id: platform.to_string(),
    }))?;

    Ok(Json(DataResponse { data: payload }))
}

/// POST /api/v1/content/{platform}/image/drop
///
/// Consume a transfer payload dropped onto this item: the reference is
/// prepended to the candidates and made active.
pub async fn drop_in(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Json(payload): Json<ImageTransfer>,
) -> AppResult<impl IntoResponse> {
    let platform = parse_platform(&platform)?;
    let item = update_item(&state, platform, |item| {
        image::accept_transfer(item, &payload)
    })
    .await?;

    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/content/{platform}/image/paste
///
/// Paste the clipboard slot into this item.
pub async fn paste(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> AppResult<impl IntoResponse> {
    let platform = parse_platform(&platform)?;
    let clipboard = state.clipboard.read().await.clone();

    let item = update_item(&state, platform, |item| {
        image::paste_from_clipboard(item, &clipboard)
    })
    .await?;

    Ok(Json(DataResponse { data: item }))
}

/// GET /api/v1/clipboard/image
///
/// The current clipboard slot (null when empty).
pub async fn clipboard_get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let clipboard = state.clipboard.read().await;
    Ok(Json(DataResponse {
        data: clipboard.current().map(str::to_string),
    }))
}

/// POST /api/v1/clipboard/image
///
/// Copy an image reference into the clipboard slot, replacing any
/// previous one.
pub async fn clipboard_copy(
    State(state): State<AppState>,
    Json(input): Json<ImageRef>,
) -> AppResult<impl IntoResponse> {
    let mut clipboard = state.clipboard.write().await;
    clipboard.copy(input.image);

    Ok(StatusCode::NO_CONTENT)
}
