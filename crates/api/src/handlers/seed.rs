//! Handler for `POST /seed`.

use axum::extract::State;
use axum::Json;
use folio_db::seed::seed_content;

use crate::error::AppResult;
use crate::response::SeedResponse;
use crate::state::AppState;

/// POST /seed
///
/// Fills the empty content collections with demo data. Safe to repeat.
pub async fn seed(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    let seeded = seed_content(&state.store).await?;
    Ok(Json(SeedResponse { seeded }))
}
