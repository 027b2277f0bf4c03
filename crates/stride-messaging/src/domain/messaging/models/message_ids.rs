// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use stride_utils::id_string;

id_string!(
    /// Identifies a message within one mailbox. The sender's and the recipient's copy of the
    /// same message don't necessarily share an id.
    MessageId
);

id_string!(
    /// Client-generated tag that ties a local echo to its persisted message.
    ClientNonce
);

const LOCAL_PREFIX: &str = "local-";

impl ClientNonce {
    pub fn local(id: impl AsRef<str>) -> Self {
        Self::from(format!("{LOCAL_PREFIX}{}", id.as_ref()))
    }

    pub fn is_local(&self) -> bool {
        self.as_str().starts_with(LOCAL_PREFIX)
    }
}
