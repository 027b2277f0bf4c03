// stride/stride-store
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{DocumentId, DocumentPath, Fields, StoreError};

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: DocumentPath,
    pub fields: Fields,
}

impl Document {
    pub fn new(path: DocumentPath, fields: Fields) -> Self {
        Self { path, fields }
    }

    pub fn id(&self) -> DocumentId {
        self.path.id()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        Ok(serde_json::from_value(Value::Object(self.fields.clone()))?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum ChangeKind {
    Added,
    Modified,
    Removed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentChange {
    pub kind: ChangeKind,
    pub document: Document,
}

/// The result of a query. `documents` holds the full ordered result set, `changes` the
/// difference to the previously emitted snapshot of the same subscription.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySnapshot {
    pub documents: Vec<Document>,
    pub changes: Vec<DocumentChange>,
}

impl QuerySnapshot {
    /// A snapshot in which every document is reported as added.
    pub fn initial(documents: Vec<Document>) -> Self {
        let changes = documents
            .iter()
            .cloned()
            .map(|document| DocumentChange {
                kind: ChangeKind::Added,
                document,
            })
            .collect();
        Self { documents, changes }
    }

    /// Computes the changes between `previous` and `current`.
    pub fn diff(previous: &[Document], current: Vec<Document>) -> Self {
        let previous_by_path = previous
            .iter()
            .map(|doc| (&doc.path, doc))
            .collect::<HashMap<_, _>>();

        let mut changes = vec![];

        for doc in &current {
            match previous_by_path.get(&doc.path) {
                None => changes.push(DocumentChange {
                    kind: ChangeKind::Added,
                    document: doc.clone(),
                }),
                Some(prev) if prev.fields != doc.fields => changes.push(DocumentChange {
                    kind: ChangeKind::Modified,
                    document: doc.clone(),
                }),
                Some(_) => (),
            }
        }

        for doc in previous {
            if !current.iter().any(|d| d.path == doc.path) {
                changes.push(DocumentChange {
                    kind: ChangeKind::Removed,
                    document: doc.clone(),
                })
            }
        }

        Self {
            documents: current,
            changes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}
