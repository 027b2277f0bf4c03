// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::messaging::models::{Message, MessageChange, MessageId, NewMessage};
use crate::domain::shared::models::{ConversationId, Feed, UserId};

/// Access to the message sub-collection of a conversation in `owner`'s mailbox.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessagesRepository: Send + Sync {
    /// Appends `message` under a store-assigned id.
    async fn append(
        &self,
        owner: &UserId,
        conversation_id: &ConversationId,
        message: &NewMessage,
    ) -> Result<MessageId>;

    /// Writes `message` under `id`, replacing an existing message with the same id.
    async fn put(
        &self,
        owner: &UserId,
        conversation_id: &ConversationId,
        id: &MessageId,
        message: &NewMessage,
    ) -> Result<()>;

    async fn contains(
        &self,
        owner: &UserId,
        conversation_id: &ConversationId,
        id: &MessageId,
    ) -> Result<bool>;

    /// All messages, oldest first.
    async fn get_all(&self, owner: &UserId, conversation_id: &ConversationId)
        -> Result<Vec<Message>>;

    /// Observes the messages of a conversation. The first item carries every existing message
    /// as `MessageChange::Added`.
    fn subscribe(
        &self,
        owner: &UserId,
        conversation_id: &ConversationId,
    ) -> Result<Feed<Vec<MessageChange>>>;
}
