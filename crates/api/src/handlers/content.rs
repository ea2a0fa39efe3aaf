//! Handlers for the public portfolio content.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use folio_core::content::placeholder_profile;
use folio_core::schema::{ContactMessage, Schema};
use folio_db::repositories::{ContactMessageRepo, ProfileRepo, ProjectRepo};
use serde_json::Value;

use crate::error::AppResult;
use crate::response::{ProfileResponse, StatusResponse};
use crate::state::AppState;

/// GET /profile
///
/// Falls back to the placeholder profile while the collection is empty.
pub async fn get_profile(State(state): State<AppState>) -> AppResult<Json<ProfileResponse>> {
    let profile = match ProfileRepo::first(&state.store).await? {
        Some(doc) => ProfileResponse::Stored(doc),
        None => ProfileResponse::Placeholder(placeholder_profile()),
    };
    Ok(Json(profile))
}

/// GET /projects
pub async fn list_projects(State(state): State<AppState>) -> AppResult<Json<Vec<Value>>> {
    let projects = ProjectRepo::list(&state.store).await?;
    Ok(Json(projects))
}

/// POST /contact
///
/// The body is validated before the store is touched.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactMessage>, JsonRejection>,
) -> AppResult<Json<StatusResponse>> {
    let Json(message) = payload?;
    let message = message.validated()?;

    let id = ContactMessageRepo::create(&state.store, &message).await?;
    tracing::info!(id, "Stored contact message");

    Ok(Json(StatusResponse { status: "ok" }))
}
