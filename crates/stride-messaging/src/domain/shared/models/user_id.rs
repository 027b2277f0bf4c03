// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use stride_utils::id_string;

id_string!(
    /// Opaque identifier of a Stride user.
    UserId
);

impl UserId {
    /// Ids must be usable as a single path segment of the document store.
    pub fn is_valid(&self) -> bool {
        !self.is_empty() && !self.as_str().contains('/')
    }
}
