//! Response bodies shared by the handlers.

use folio_core::schema::Profile;
use folio_db::seed::SeedSummary;
use serde::Serialize;
use serde_json::Value;

/// `{ "message": ... }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "status": ... }`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// `{ "seeded": { "profile": bool, "projects": n } }`
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub seeded: SeedSummary,
}

/// Body of `GET /profile`: the stored document, or the placeholder when
/// nothing has been seeded yet.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProfileResponse {
    Stored(Value),
    Placeholder(Profile),
}
