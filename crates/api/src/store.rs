//! Startup wiring for the document store.

use folio_db::store::{PgDocumentStore, StoreHandle};

use crate::config::DatabaseConfig;

/// Build the store handle from configuration.
///
/// Never fails: missing settings or a malformed URL yield an unavailable
/// handle, and an unreachable server yields a connected handle whose calls
/// report errors.
pub async fn connect(config: &DatabaseConfig) -> StoreHandle {
    let (Some(url), Some(name)) = (config.url.as_deref(), config.name.as_deref()) else {
        tracing::warn!(
            database_url_set = config.url.is_some(),
            database_name_set = config.name.is_some(),
            "Document store not configured; store-backed endpoints will fail"
        );
        return StoreHandle::unavailable();
    };

    let pool = match folio_db::create_pool(url, name) {
        Ok(pool) => pool,
        Err(err) => {
            tracing::warn!(error = %err, "Invalid DATABASE_URL; document store unavailable");
            return StoreHandle::unavailable();
        }
    };

    match folio_db::health_check(&pool).await {
        Ok(()) => match folio_db::run_migrations(&pool).await {
            Ok(()) => tracing::info!(database = name, "Document store ready"),
            Err(err) => tracing::warn!(error = %err, "Failed to apply document store migrations"),
        },
        Err(err) => {
            tracing::warn!(error = %err, database = name, "Document store unreachable at startup")
        }
    }

    StoreHandle::new(PgDocumentStore::new(pool))
}
