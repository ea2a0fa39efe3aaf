use async_trait::async_trait;
use folio_core::types::DocumentId;
use sqlx::types::Json;
use sqlx::FromRow;

use super::{DocumentBody, DocumentStore, StoreError, StoredDocument};
use crate::DbPool;

#[derive(FromRow)]
struct DocumentRow {
    id: DocumentId,
    body: Json<DocumentBody>,
}

impl From<DocumentRow> for StoredDocument {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            body: row.body.0,
        }
    }
}

/// Document store backed by the `documents` table (JSONB bodies).
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, body: DocumentBody) -> Result<DocumentId, StoreError> {
        let id = sqlx::query_scalar::<_, DocumentId>(
            "INSERT INTO documents (collection, body) VALUES ($1, $2) RETURNING id",
        )
        .bind(collection)
        .bind(Json(body))
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        limit: Option<usize>,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        // LIMIT NULL means no limit.
        let limit = limit.map(|l| i64::try_from(l).unwrap_or(i64::MAX));
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, body FROM documents WHERE collection = $1 ORDER BY id LIMIT $2",
        )
        .bind(collection)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(StoredDocument::from).collect())
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
                .bind(collection)
                .fetch_one(&self.pool)
                .await?;
        Ok(count.max(0) as u64)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }
}
