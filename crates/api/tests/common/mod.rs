#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use folio_api::config::{CorsOrigins, DatabaseConfig, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::types::DocumentId;
use folio_db::store::{
    DocumentBody, DocumentStore, MemoryDocumentStore, StoreError, StoredDocument, StoreHandle,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and both database settings
/// marked as present.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: CorsOrigins::Any,
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: Some("postgres://localhost:5432/portfolio".into()),
            name: Some("portfolio".into()),
        },
    }
}

/// Build the full application router (same middleware stack as production)
/// around `store`.
pub fn build_test_app(store: StoreHandle) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(store: StoreHandle, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub fn memory_store() -> StoreHandle {
    StoreHandle::new(MemoryDocumentStore::new())
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Store whose reads and writes work but whose introspection fails.
#[derive(Default)]
pub struct IntrospectionFailingStore {
    inner: MemoryDocumentStore,
}

#[async_trait]
impl DocumentStore for IntrospectionFailingStore {
    async fn insert(&self, collection: &str, body: DocumentBody) -> Result<DocumentId, StoreError> {
        self.inner.insert(collection, body).await
    }

    async fn find(
        &self,
        collection: &str,
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        self.inner.find(collection, limit).await
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        self.inner.count(collection).await
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Err(StoreError::NotAnObject {
            collection: "a collection name long enough to need truncating".into(),
        })
    }
}

/// Store that panics on every call.
pub struct PanickingStore;

#[async_trait]
impl DocumentStore for PanickingStore {
    async fn insert(&self, _: &str, _: DocumentBody) -> Result<DocumentId, StoreError> {
        panic!("insert exploded")
    }

    async fn find(&self, _: &str, _: Option<usize>) -> Result<Vec<StoredDocument>, StoreError> {
        panic!("find exploded")
    }

    async fn count(&self, _: &str) -> Result<u64, StoreError> {
        panic!("count exploded")
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        panic!("introspection exploded")
    }
}
