//! Document store adapter for the portfolio content API.
//!
//! Documents are schemaless JSON objects grouped into named collections. The
//! [`store::DocumentStore`] trait is the seam between the API and the backing
//! database; [`store::StoreHandle`] is the injected, possibly-unconfigured
//! handle every component receives.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod repositories;
pub mod seed;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a lazily-connecting pool for `database_url`, targeting
/// `database_name` regardless of the database named in the URL.
///
/// No connection is attempted here, so an unreachable server does not stop
/// the process from starting. Only a malformed URL is an error.
pub fn create_pool(database_url: &str, database_name: &str) -> Result<DbPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?.database(database_name);
    Ok(PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(options))
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations (creates the `documents` table).
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
