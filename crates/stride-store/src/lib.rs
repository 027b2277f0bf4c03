// stride/stride-store
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

pub use document::{ChangeKind, Document, DocumentChange, QuerySnapshot};
pub use error::StoreError;
pub use path::{CollectionPath, DocumentId, DocumentPath};
pub use query::{Direction, Filter, FilterOp, OrderBy, Query};
pub use subscription::{ListenerRegistration, QuerySubscription, SnapshotStream};
pub use write::{Fields, SetOptions, WriteFields, WriteValue};

mod document;
mod driver;
mod error;
mod path;
pub mod prelude;
mod query;
pub mod rules;
mod subscription;
mod write;

/// A transactional document database as seen by a single authenticated client.
///
/// Each operation is evaluated against the access rules of the backing store, so a client may
/// very well be able to read a document it is not allowed to write.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, path: &DocumentPath) -> Result<Option<Document>, StoreError>;

    async fn set(
        &self,
        path: &DocumentPath,
        fields: WriteFields,
        options: SetOptions,
    ) -> Result<(), StoreError>;

    /// Applies `fields` to an existing document. Fails with `StoreError::NotFound` if the
    /// document doesn't exist.
    async fn update(&self, path: &DocumentPath, fields: WriteFields) -> Result<(), StoreError>;

    /// Deletes the document at `path`. Deleting a missing document is not an error.
    async fn delete(&self, path: &DocumentPath) -> Result<(), StoreError>;

    /// Creates a new document with a store-assigned id in `collection`.
    async fn add(
        &self,
        collection: &CollectionPath,
        fields: WriteFields,
    ) -> Result<DocumentId, StoreError>;

    async fn query(&self, query: &Query) -> Result<QuerySnapshot, StoreError>;

    /// Opens a standing subscription on `query`. The first emitted snapshot contains all
    /// matching documents as `ChangeKind::Added`.
    fn subscribe(&self, query: Query) -> Result<QuerySubscription, StoreError>;
}
