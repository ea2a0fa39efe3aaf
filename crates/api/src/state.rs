use std::sync::Arc;

use folio_db::store::StoreHandle;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the store handle and configuration are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Document store handle; unavailable when no connection is configured.
    pub store: StoreHandle,
    /// Server configuration, loaded once at startup.
    pub config: Arc<ServerConfig>,
}
