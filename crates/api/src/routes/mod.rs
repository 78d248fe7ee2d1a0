pub mod health;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /briefings/generate                      generate a new 7-item batch (POST)
/// /briefings/tone-suggestions              fixed tone suggestion list (GET)
///
/// /content                                 current batch (GET)
/// /content/{platform}                      single item (GET), edit commit (PUT)
/// /content/{platform}/approve              Draft -> Approved (POST)
/// /content/{platform}/schedule             schedule / unschedule (POST)
/// /content/{platform}/image/generate       request image candidates (POST)
/// /content/{platform}/image/upload         replace visuals with an upload (POST)
/// /content/{platform}/image/select         activate an existing candidate (POST)
/// /content/{platform}/image                remove active image + candidates (DELETE)
/// /content/{platform}/image/transfer       produce a drag payload (GET)
/// /content/{platform}/image/drop           consume a drag payload (POST)
/// /content/{platform}/image/paste          paste the clipboard slot (POST)
///
/// /clipboard/image                         read (GET) / copy (POST) the slot
///
/// /calendar                                the 7-day board (GET)
/// /calendar/{date}/assign                  drop an item onto a day (POST)
///
/// /publish                                 dispatch Scheduled items (POST)
/// /publish/local                           bulk-mark Scheduled as Published (POST)
///
/// /settings/prompts                        get, replace
/// /settings/profile                        get, replace
/// /settings/automation                     get, replace
/// /settings/personas                       list, create
/// /settings/personas/{id}                  update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // -- Briefing / generation --
        .route("/briefings/generate", post(handlers::briefing::generate))
        .route(
            "/briefings/tone-suggestions",
            get(handlers::briefing::tone_suggestions),
        )
        // -- Content batch --
        .route("/content", get(handlers::content::list_content))
        .route(
            "/content/{platform}",
            get(handlers::content::get_content).put(handlers::content::update_content),
        )
        // -- Lifecycle --
        .route(
            "/content/{platform}/approve",
            post(handlers::lifecycle::approve),
        )
        .route(
            "/content/{platform}/schedule",
            post(handlers::lifecycle::schedule),
        )
        // -- Visuals --
        .route(
            "/content/{platform}/image/generate",
            post(handlers::images::generate),
        )
        .route(
            "/content/{platform}/image/upload",
            post(handlers::images::upload),
        )
        .route(
            "/content/{platform}/image/select",
            post(handlers::images::select),
        )
        .route(
            "/content/{platform}/image",
            delete(handlers::images::remove),
        )
        .route(
            "/content/{platform}/image/transfer",
            get(handlers::images::transfer_out),
        )
        .route(
            "/content/{platform}/image/drop",
            post(handlers::images::drop_in),
        )
        .route(
            "/content/{platform}/image/paste",
            post(handlers::images::paste),
        )
        .route(
            "/clipboard/image",
            get(handlers::images::clipboard_get).post(handlers::images::clipboard_copy),
        )
        // -- Calendar --
        .route("/calendar", get(handlers::calendar::board))
        .route("/calendar/{date}/assign", post(handlers::calendar::assign))
        // -- Publish --
        .route("/publish", post(handlers::publish::dispatch))
        .route("/publish/local", post(handlers::publish::publish_local))
        // -- Settings --
        .route(
            "/settings/prompts",
            get(handlers::settings::get_prompts).put(handlers::settings::update_prompts),
        )
        .route(
            "/settings/profile",
            get(handlers::settings::get_profile).put(handlers::settings::update_profile),
        )
        .route(
            "/settings/automation",
            get(handlers::settings::get_automation).put(handlers::settings::update_automation),
        )
        .route(
            "/settings/personas",
            get(handlers::settings::list_personas).post(handlers::settings::create_persona),
        )
        .route(
            "/settings/personas/{id}",
            put(handlers::settings::update_persona).delete(handlers::settings::delete_persona),
        )
}
