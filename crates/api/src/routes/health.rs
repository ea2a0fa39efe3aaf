//! Liveness and store diagnostics.
//!
//! `GET /test` must answer with a well-formed body whatever state the store
//! is in: every failure is rendered into the `database` string.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use folio_db::store::StoreHandle;
use serde::Serialize;

use crate::config::DatabaseConfig;
use crate::response::MessageResponse;
use crate::state::AppState;

/// At most this many collection names are reported.
const MAX_LISTED_COLLECTIONS: usize = 10;

/// Error text in the `database` field is cut to this many characters.
const MAX_ERROR_CHARS: usize = 50;

/// Diagnostics response payload.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    /// Store availability, with the error text when introspection failed.
    pub database: String,
    /// Whether `DATABASE_URL` was set at startup.
    pub database_url: String,
    /// Whether `DATABASE_NAME` was set at startup.
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// GET / -- liveness message.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Portfolio API running",
    })
}

/// GET /test -- store availability, connectivity and collections.
async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    Json(collect_diagnostics(&state.store, &state.config.database).await)
}

/// Inspect the store without ever failing.
pub async fn collect_diagnostics(
    store: &StoreHandle,
    database: &DatabaseConfig,
) -> DiagnosticsResponse {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".into(),
        database: "❌ Not Available".into(),
        database_url: setting_flag(database.url.is_some()).into(),
        database_name: setting_flag(database.name.is_some()).into(),
        connection_status: "Not Connected".into(),
        collections: Vec::new(),
    };

    if !store.is_available() {
        response.database = "⚠️  Available but not initialized".into();
        return response;
    }

    response.database = "✅ Available".into();
    response.connection_status = "Connected".into();

    // Introspect on a separate task so a panicking store is reported too.
    let handle = store.clone();
    let introspection = tokio::spawn(async move {
        let store = handle.get()?;
        store.collection_names().await
    });

    match introspection.await {
        Ok(Ok(mut names)) => {
            names.truncate(MAX_LISTED_COLLECTIONS);
            response.collections = names;
            response.database = "✅ Connected & Working".into();
        }
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "Store introspection failed");
            response.database =
                format!("⚠️  Connected but Error: {}", truncate_chars(&err.to_string()));
        }
        Err(err) => {
            tracing::error!(error = %err, "Store introspection task failed");
            response.database = format!("❌ Error: {}", truncate_chars(&err.to_string()));
        }
    }

    response
}

fn setting_flag(set: bool) -> &'static str {
    if set {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}

fn truncate_chars(text: &str) -> String {
    text.chars().take(MAX_ERROR_CHARS).collect()
}

/// Mount the liveness and diagnostics routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(80);
        assert_eq!(truncate_chars(&text).chars().count(), MAX_ERROR_CHARS);
        assert_eq!(truncate_chars("short"), "short");
    }

    #[tokio::test]
    async fn unconfigured_store_reports_not_initialized() {
        let report =
            collect_diagnostics(&StoreHandle::unavailable(), &DatabaseConfig::default()).await;
        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.database, "⚠️  Available but not initialized");
        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert_eq!(report.connection_status, "Not Connected");
        assert!(report.collections.is_empty());
    }
}
