//! Settings endpoints: prompts, author profile, automation target, and
//! persona management.
//!
//! Every committed mutation replaces the whole in-memory document and is
//! persisted synchronously before the response is sent, so the stored
//! value always matches the last committed state.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use multiplier_core::error::CoreError;
use multiplier_core::settings::{
    mint_persona_id, AutomationConfig, Persona, PromptConfig, UserProfile,
};
use multiplier_store::{KEY_AUTOMATION, KEY_PERSONAS, KEY_PROMPTS, KEY_USER_PROFILE};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

/// GET /api/v1/settings/prompts
pub async fn get_prompts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = state.settings.read().await;
    Ok(Json(DataResponse {
        data: settings.prompts.clone(),
    }))
}

/// PUT /api/v1/settings/prompts
pub async fn update_prompts(
    State(state): State<AppState>,
    Json(input): Json<PromptConfig>,
) -> AppResult<impl IntoResponse> {
    let mut settings = state.settings.write().await;
    settings.prompts = input;
    state.store.save(KEY_PROMPTS, &settings.prompts)?;

    tracing::info!("Prompt instructions updated");

    Ok(Json(DataResponse {
        data: settings.prompts.clone(),
    }))
}

// ---------------------------------------------------------------------------
// Author profile
// ---------------------------------------------------------------------------

/// GET /api/v1/settings/profile
pub async fn get_profile(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = state.settings.read().await;
    Ok(Json(DataResponse {
        data: settings.profile.clone(),
    }))
}

/// PUT /api/v1/settings/profile
pub async fn update_profile(
    State(state): State<AppState>,
    Json(input): Json<UserProfile>,
) -> AppResult<impl IntoResponse> {
    let mut settings = state.settings.write().await;
    settings.profile = input;
    state.store.save(KEY_USER_PROFILE, &settings.profile)?;

    tracing::info!("Author profile updated");

    Ok(Json(DataResponse {
        data: settings.profile.clone(),
    }))
}

// ---------------------------------------------------------------------------
// Automation
// ---------------------------------------------------------------------------

/// GET /api/v1/settings/automation
pub async fn get_automation(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = state.settings.read().await;
    Ok(Json(DataResponse {
        data: settings.automation.clone(),
    }))
}

/// PUT /api/v1/settings/automation
pub async fn update_automation(
    State(state): State<AppState>,
    Json(input): Json<AutomationConfig>,
) -> AppResult<impl IntoResponse> {
    let mut settings = state.settings.write().await;
    settings.automation = input;
    state.store.save(KEY_AUTOMATION, &settings.automation)?;

    tracing::info!("Automation target updated");

    Ok(Json(DataResponse {
        data: settings.automation.clone(),
    }))
}

// ---------------------------------------------------------------------------
// Personas
// ---------------------------------------------------------------------------

/// Persona create/update payload (the id is server-minted).
#[derive(Debug, Deserialize)]
pub struct PersonaInput {
    pub name: String,
    pub description: String,
}

impl PersonaInput {
    fn check(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Persona name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// GET /api/v1/settings/personas
pub async fn list_personas(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let settings = state.settings.read().await;
    Ok(Json(DataResponse {
        data: settings.personas.clone(),
    }))
}

/// POST /api/v1/settings/personas
pub async fn create_persona(
    State(state): State<AppState>,
    Json(input): Json<PersonaInput>,
) -> AppResult<impl IntoResponse> {
    input.check()?;

    let mut settings = state.settings.write().await;

    // Ids are minted from the creation timestamp; bump on the (rare)
    // same-millisecond collision.
    let mut millis = chrono::Utc::now().timestamp_millis();
    while settings.personas.iter().any(|p| p.id == mint_persona_id(millis)) {
        millis += 1;
    }

    let persona = Persona {
        id: mint_persona_id(millis),
        name: input.name,
        description: input.description,
    };
    settings.personas.push(persona.clone());
    state.store.save(KEY_PERSONAS, &settings.personas)?;

    tracing::info!(persona_id = %persona.id, name = %persona.name, "Persona created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: persona })))
}

/// PUT /api/v1/settings/personas/{id}
pub async fn update_persona(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<PersonaInput>,
) -> AppResult<impl IntoResponse> {
    input.check()?;

    let mut settings = state.settings.write().await;
    let persona = settings
        .personas
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Persona",
            id: id.clone(),
        }))?;

    persona.name = input.name;
    persona.description = input.description;
    let updated = persona.clone();
    state.store.save(KEY_PERSONAS, &settings.personas)?;

    tracing::info!(persona_id = %id, "Persona updated");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/settings/personas/{id}
pub async fn delete_persona(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let mut settings = state.settings.write().await;
    let before = settings.personas.len();
    settings.personas.retain(|p| p.id != id);

    if settings.personas.len() == before {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Persona",
            id,
        }));
    }

    state.store.save(KEY_PERSONAS, &settings.personas)?;

    tracing::info!(persona_id = %id, "Persona deleted");

    Ok(StatusCode::NO_CONTENT)
}
