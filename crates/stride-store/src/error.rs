// stride/stride-store
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Document not found at '{0}'.")]
    NotFound(String),
    #[error("Missing or insufficient permissions for '{0}'.")]
    PermissionDenied(String),
    #[error("Invalid path '{0}'.")]
    InvalidPath(String),
    #[error("The store is unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}
