use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use folio_core::types::DocumentId;
use tokio::sync::RwLock;

use super::{DocumentBody, DocumentStore, StoreError, StoredDocument};

/// Process-local document store. Contents live as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Vec<StoredDocument>>>,
    last_id: AtomicI64,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, body: DocumentBody) -> Result<DocumentId, StoreError> {
        let id = self.last_id.fetch_add(1, Ordering::Relaxed) + 1;
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, body });
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        let collections = self.collections.read().await;
        let docs = collections.get(collection).map(Vec::as_slice).unwrap_or_default();
        let take = limit.unwrap_or(docs.len());
        Ok(docs.iter().take(take).cloned().collect())
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}
