// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::messaging::models::{MessageId, SendMessageError, SendMessageRequest};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessageRelayService: Send + Sync {
    /// Writes the message into the sender's mailbox and queues its delivery to the recipient.
    /// Succeeds as soon as the sender's copy is written. Returns the id of the sender's copy.
    async fn send(&self, request: SendMessageRequest) -> Result<MessageId, SendMessageError>;
}
