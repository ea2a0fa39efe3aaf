//! Repository for the `project` collection.

use folio_core::schema::{Project, Schema};
use folio_core::types::DocumentId;
use serde_json::Value;

use crate::store::{create_document, get_documents, StoreError, StoreHandle};

pub struct ProjectRepo;

impl ProjectRepo {
    /// All projects in store order, in their public shape.
    pub async fn list(store: &StoreHandle) -> Result<Vec<Value>, StoreError> {
        let docs = get_documents(store, Project::COLLECTION, None).await?;
        Ok(docs.into_iter().map(|doc| doc.into_public()).collect())
    }

    pub async fn create(store: &StoreHandle, project: &Project) -> Result<DocumentId, StoreError> {
        create_document(store, Project::COLLECTION, project).await
    }

    pub async fn count(store: &StoreHandle) -> Result<u64, StoreError> {
        store.get()?.count(Project::COLLECTION).await
    }
}
