//! The document store seam and the helpers built on top of it.

mod memory;
mod postgres;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use folio_core::types::{DocumentId, Timestamp};
use serde::Serialize;
use serde_json::{Map, Value};

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// A JSON object as stored in a collection.
pub type DocumentBody = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No store connection was configured at startup.
    #[error("Database not configured")]
    Unavailable,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The record serialized to something other than a JSON object.
    #[error("Document for collection '{collection}' is not a JSON object")]
    NotAnObject { collection: String },
}

/// A document read back from the store, with its internal identifier kept
/// apart from the body.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub body: DocumentBody,
}

impl StoredDocument {
    /// Public shape handed to API clients: the body without the identifier.
    pub fn into_public(self) -> Value {
        Value::Object(self.body)
    }
}

/// A database that stores schemaless documents in named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `body` into `collection`, returning the generated identifier.
    async fn insert(&self, collection: &str, body: DocumentBody) -> Result<DocumentId, StoreError>;

    /// Documents of `collection` in insertion order, at most `limit` of them.
    async fn find(
        &self,
        collection: &str,
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    /// Number of documents in `collection`.
    async fn count(&self, collection: &str) -> Result<u64, StoreError>;

    /// Names of the collections holding at least one document, sorted.
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;
}

/// Process-wide store handle, injected into every component.
///
/// Empty when no connection settings were provided; every store operation
/// then fails with [`StoreError::Unavailable`].
#[derive(Clone, Default)]
pub struct StoreHandle(Option<Arc<dyn DocumentStore>>);

impl StoreHandle {
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self::connected(Arc::new(store))
    }

    pub fn connected(store: Arc<dyn DocumentStore>) -> Self {
        Self(Some(store))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }

    pub fn is_available(&self) -> bool {
        self.0.is_some()
    }

    /// The underlying store, or [`StoreError::Unavailable`].
    pub fn get(&self) -> Result<&dyn DocumentStore, StoreError> {
        self.0.as_deref().ok_or(StoreError::Unavailable)
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle")
            .field("available", &self.is_available())
            .finish()
    }
}

/// Serialize `record` and insert it into `collection`, stamping
/// `created_at` / `updated_at`. Returns the generated identifier.
pub async fn create_document<T: Serialize>(
    store: &StoreHandle,
    collection: &str,
    record: &T,
) -> Result<DocumentId, StoreError> {
    let store = store.get()?;

    let mut body = match serde_json::to_value(record)? {
        Value::Object(body) => body,
        _ => {
            return Err(StoreError::NotAnObject {
                collection: collection.to_string(),
            })
        }
    };

    let now: Timestamp = chrono::Utc::now();
    let now = serde_json::to_value(now)?;
    body.insert("created_at".into(), now.clone());
    body.insert("updated_at".into(), now);

    let id = store.insert(collection, body).await?;
    tracing::debug!(collection, id, "Inserted document");
    Ok(id)
}

/// Documents of `collection` in store order, optionally capped at `limit`.
pub async fn get_documents(
    store: &StoreHandle,
    collection: &str,
    limit: Option<usize>,
) -> Result<Vec<StoredDocument>, StoreError> {
    let docs = store.get()?.find(collection, limit).await?;
    tracing::debug!(collection, count = docs.len(), "Fetched documents");
    Ok(docs)
}
