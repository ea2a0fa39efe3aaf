pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{content, seed};
use crate::state::AppState;

/// Portfolio content routes, mounted at the root.
///
/// ```text
/// GET  /profile
/// GET  /projects
/// POST /contact
/// POST /seed
/// ```
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(content::get_profile))
        .route("/projects", get(content::list_projects))
        .route("/contact", post(content::submit_contact))
        .route("/seed", post(seed::seed))
}
