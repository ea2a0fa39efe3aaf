//! Repository for the `profile` collection.

use folio_core::schema::{Profile, Schema};
use folio_core::types::DocumentId;
use serde_json::Value;

use crate::store::{create_document, get_documents, StoreError, StoreHandle};

pub struct ProfileRepo;

impl ProfileRepo {
    /// The first profile in store order, in its public shape.
    pub async fn first(store: &StoreHandle) -> Result<Option<Value>, StoreError> {
        let docs = get_documents(store, Profile::COLLECTION, Some(1)).await?;
        Ok(docs.into_iter().next().map(|doc| doc.into_public()))
    }

    pub async fn create(store: &StoreHandle, profile: &Profile) -> Result<DocumentId, StoreError> {
        create_document(store, Profile::COLLECTION, profile).await
    }

    pub async fn count(store: &StoreHandle) -> Result<u64, StoreError> {
        store.get()?.count(Profile::COLLECTION).await
    }
}
