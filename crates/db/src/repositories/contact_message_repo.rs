//! Repository for the `contactmessage` collection. Write-only.

use folio_core::schema::{ContactMessage, Schema};
use folio_core::types::DocumentId;

use crate::store::{create_document, StoreError, StoreHandle};

pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// Store an already-validated message.
    pub async fn create(
        store: &StoreHandle,
        message: &ContactMessage,
    ) -> Result<DocumentId, StoreError> {
        create_document(store, ContactMessage::COLLECTION, message).await
    }
}
