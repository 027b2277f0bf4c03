// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::messaging::models::ClientNonce;
use crate::domain::shared::models::UserId;

/// An optimistic, not yet persisted message shown right after sending.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalEcho {
    pub nonce: ClientNonce,
    pub text: String,
    pub sender_id: UserId,
    pub created_at: DateTime<Utc>,
}
