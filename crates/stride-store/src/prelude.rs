// stride/stride-store
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::{
    driver::memory::{FaultSpec, InMemoryClient, InMemoryStore},
    rules::{AccessPolicy, AccessRequest, AllowAllPolicy, Operation, OwnerScopedPolicy},
    ChangeKind, CollectionPath, Direction, Document, DocumentChange, DocumentId, DocumentPath,
    DocumentStore, Fields, Filter, FilterOp, ListenerRegistration, OrderBy, Query,
    QuerySnapshot, QuerySubscription, SetOptions, SnapshotStream, StoreError, WriteFields,
    WriteValue,
};
