use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use folio_db::store::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses of
/// the form `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A document store error from `folio_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be read as the expected JSON document.
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::Validation(fields)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": self.to_string(),
                    "code": "VALIDATION_ERROR",
                    "fields": fields,
                }),
            ),

            AppError::Store(StoreError::Unavailable) => {
                tracing::warn!("Request needs the document store but none is configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Database not configured",
                        "code": "STORAGE_UNAVAILABLE",
                    }),
                )
            }

            AppError::Store(err) => {
                tracing::error!(error = %err, "Document store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "An internal error occurred",
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }

            AppError::Body(rejection) => (
                rejection.status(),
                json!({
                    "error": rejection.body_text(),
                    "code": "INVALID_BODY",
                }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
