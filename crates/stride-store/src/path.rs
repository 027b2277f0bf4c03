// stride/stride-store
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use stride_utils::id_string;

use crate::StoreError;

id_string!(
    /// The last segment of a document path.
    DocumentId
);

/// Path to a collection, e.g. `users/jane/conversations`. Always has an odd number of segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath(String);

/// Path to a document, e.g. `users/jane`. Always has an even number of segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentPath(String);

impl CollectionPath {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn parse(path: &str) -> Result<Self, StoreError> {
        let path = Self(path.trim_matches('/').to_string());
        path.validate()?;
        Ok(path)
    }

    pub fn doc(&self, id: impl AsRef<str>) -> DocumentPath {
        DocumentPath(format!("{}/{}", self.0, id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name of the collection, i.e. its last segment.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// The document this collection is nested in, if any.
    pub fn parent(&self) -> Option<DocumentPath> {
        self.0
            .rsplit_once('/')
            .map(|(parent, _)| DocumentPath(parent.to_string()))
    }

    pub(crate) fn validate(&self) -> Result<(), StoreError> {
        validate_segments(&self.0, 1)
    }
}

impl DocumentPath {
    pub fn parse(path: &str) -> Result<Self, StoreError> {
        let path = Self(path.trim_matches('/').to_string());
        path.validate()?;
        Ok(path)
    }

    pub fn collection(&self, name: impl AsRef<str>) -> CollectionPath {
        CollectionPath(format!("{}/{}", self.0, name.as_ref()))
    }

    pub fn parent(&self) -> CollectionPath {
        match self.0.rsplit_once('/') {
            Some((parent, _)) => CollectionPath(parent.to_string()),
            None => CollectionPath(String::new()),
        }
    }

    pub fn id(&self) -> DocumentId {
        DocumentId::from(self.0.rsplit('/').next().unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    pub(crate) fn validate(&self) -> Result<(), StoreError> {
        validate_segments(&self.0, 0)
    }
}

fn validate_segments(path: &str, parity: usize) -> Result<(), StoreError> {
    let segments = path.split('/').collect::<Vec<_>>();
    if segments.iter().any(|s| s.trim().is_empty()) || segments.len() % 2 != parity {
        return Err(StoreError::InvalidPath(path.to_string()));
    }
    Ok(())
}

impl Display for CollectionPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for DocumentPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_nested_paths() {
        let path = CollectionPath::new("users")
            .doc("jane")
            .collection("conversations")
            .doc("a__b");

        assert_eq!(path.as_str(), "users/jane/conversations/a__b");
        assert_eq!(path.id(), DocumentId::from("a__b"));
        assert_eq!(path.parent().as_str(), "users/jane/conversations");
        assert_eq!(path.parent().name(), "conversations");
        assert_eq!(
            path.parent().parent().map(|p| p.to_string()),
            Some("users/jane".to_string())
        );
    }

    #[test]
    fn test_rejects_malformed_paths() {
        assert!(DocumentPath::parse("users").is_err());
        assert!(DocumentPath::parse("users//x").is_err());
        assert!(CollectionPath::parse("users/jane").is_err());
        assert!(CollectionPath::parse("/users/").is_ok());
        assert!(CollectionPath::new("users").doc("").validate().is_err());
    }
}
