// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use stride_proc_macros::DependenciesStruct;

use crate::app::deps::DynConversationsRepository;
use crate::domain::shared::models::{ConversationId, UserId};

use super::super::ReadStateTracker as ReadStateTrackerTrait;

#[derive(DependenciesStruct)]
pub struct ReadStateTracker {
    conversations_repo: DynConversationsRepository,
}

#[async_trait]
impl ReadStateTrackerTrait for ReadStateTracker {
    async fn mark_read(&self, conversation_id: &ConversationId, user_id: &UserId) -> Result<()> {
        self.conversations_repo
            .reset_unread_count(user_id, conversation_id)
            .await
    }
}
