/// Identifier assigned to a document by the store. Never part of the public
/// document shape.
pub type DocumentId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
