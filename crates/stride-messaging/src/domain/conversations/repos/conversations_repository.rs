// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::conversations::models::{Conversation, ParticipantSnapshot};
use crate::domain::shared::models::{ConversationId, UserId};

/// Access to the conversation copies stored in a user's mailbox. `owner` is always the user
/// whose mailbox is read or written.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConversationsRepository: Send + Sync {
    async fn get(&self, owner: &UserId, id: &ConversationId) -> Result<Option<Conversation>>;

    /// All conversations of `owner`, most recent activity first.
    async fn get_all(&self, owner: &UserId) -> Result<Vec<Conversation>>;

    /// Writes `conversation` as is, replacing an existing copy.
    async fn create(&self, owner: &UserId, conversation: &Conversation) -> Result<()>;

    /// Merges the id, members and participant snapshot of `conversation` into `owner`'s copy,
    /// leaving counters and the last message untouched.
    async fn merge_identity(&self, owner: &UserId, conversation: &Conversation) -> Result<()>;

    async fn set_participant_snapshot(
        &self,
        owner: &UserId,
        id: &ConversationId,
        snapshot: &ParticipantSnapshot,
    ) -> Result<()>;

    /// Sets the last message preview and stamps the last message time with the store's clock.
    async fn record_sent_message(
        &self,
        owner: &UserId,
        id: &ConversationId,
        preview: &str,
    ) -> Result<()>;

    /// Increments the unread counter by one. If `preview` is set, the last message and its
    /// timestamp are replaced as well.
    async fn record_received_message(
        &self,
        owner: &UserId,
        id: &ConversationId,
        preview: Option<String>,
        sent_at: DateTime<Utc>,
    ) -> Result<()>;

    async fn reset_unread_count(&self, owner: &UserId, id: &ConversationId) -> Result<()>;
}
