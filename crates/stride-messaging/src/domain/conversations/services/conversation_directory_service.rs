// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::conversations::models::{
    Conversation, ConversationError, ResolvedConversation,
};
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ConversationDirectoryService: Send + Sync {
    /// Resolves the conversation between `self_id` and `other_id`, creating `self_id`'s copy
    /// if it doesn't exist yet.
    async fn resolve_or_create(
        &self,
        self_id: &UserId,
        other_id: &UserId,
    ) -> Result<ResolvedConversation, ConversationError>;

    /// Returns the conversations in `self_id`'s mailbox, most recent first.
    async fn load_conversations(&self, self_id: &UserId) -> Result<Vec<Conversation>>;
}
