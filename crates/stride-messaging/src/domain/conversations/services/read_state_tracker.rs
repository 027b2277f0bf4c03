// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::{ConversationId, UserId};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ReadStateTracker: Send + Sync {
    /// Resets the unread counter of `user_id`'s copy of the conversation.
    async fn mark_read(&self, conversation_id: &ConversationId, user_id: &UserId) -> Result<()>;
}
