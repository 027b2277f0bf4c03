// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use stride_proc_macros::InjectDependencies;

use crate::app::deps::{DynConversationDirectoryService, DynReadStateTracker};
use crate::dtos::{Conversation, ConversationError, ConversationId, ResolvedConversation, UserId};

#[derive(InjectDependencies)]
pub struct ConversationsService {
    #[inject]
    conversation_directory_service: DynConversationDirectoryService,
    #[inject]
    read_state_tracker: DynReadStateTracker,
}

impl ConversationsService {
    /// Returns the conversation between `self_id` and `other_id`, creating it if needed.
    pub async fn resolve_or_create(
        &self,
        self_id: &UserId,
        other_id: &UserId,
    ) -> Result<ResolvedConversation, ConversationError> {
        self.conversation_directory_service
            .resolve_or_create(self_id, other_id)
            .await
    }

    pub async fn load_conversations(&self, self_id: &UserId) -> Result<Vec<Conversation>> {
        self.conversation_directory_service
            .load_conversations(self_id)
            .await
    }

    pub async fn total_unread_count(&self, self_id: &UserId) -> Result<u32> {
        Ok(self
            .load_conversations(self_id)
            .await?
            .iter()
            .fold(0u32, |total, conversation| {
                total.saturating_add(conversation.unread_count)
            }))
    }

    pub async fn mark_read(
        &self,
        conversation_id: &ConversationId,
        user_id: &UserId,
    ) -> Result<()> {
        self.read_state_tracker
            .mark_read(conversation_id, user_id)
            .await
    }
}
