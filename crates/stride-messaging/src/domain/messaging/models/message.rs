// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::messaging::models::{ClientNonce, MessageId};
use crate::domain::shared::models::UserId;

/// A message as stored in one participant's mailbox.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender_id: UserId,
    pub created_at: DateTime<Utc>,
    pub nonce: Option<ClientNonce>,
}

/// A message about to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub text: String,
    pub sender_id: UserId,
    /// `None` lets the store assign the creation time.
    pub created_at: Option<DateTime<Utc>>,
    pub nonce: Option<ClientNonce>,
}

/// An incremental change of a mailbox's message list.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageChange {
    Added(Message),
    Modified(Message),
    Removed(MessageId),
}
