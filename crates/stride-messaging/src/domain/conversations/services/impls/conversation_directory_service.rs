// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use stride_proc_macros::DependenciesStruct;

use crate::app::deps::{DynConversationsRepository, DynTimeProvider, DynUserProfileRepository};
use crate::domain::conversations::models::{
    Conversation, ConversationError, ParticipantSnapshot, ResolvedConversation,
};
use crate::domain::general::services::TimeProvider;
use crate::domain::shared::models::{ConversationId, UserId};
use crate::domain::user_profiles::models::UserProfile;

use super::super::ConversationDirectoryService as ConversationDirectoryServiceTrait;

#[derive(DependenciesStruct)]
pub struct ConversationDirectoryService {
    conversations_repo: DynConversationsRepository,
    time_provider: DynTimeProvider,
    user_profile_repo: DynUserProfileRepository,
}

#[async_trait]
impl ConversationDirectoryServiceTrait for ConversationDirectoryService {
    #[tracing::instrument(skip(self))]
    async fn resolve_or_create(
        &self,
        self_id: &UserId,
        other_id: &UserId,
    ) -> Result<ResolvedConversation, ConversationError> {
        if !self_id.is_valid() || !other_id.is_valid() || self_id == other_id {
            return Err(ConversationError::InvalidParticipants);
        }

        let self_profile = self.load_profile(self_id).await?;
        let other_profile = self.load_profile(other_id).await?;

        let conversation_id = ConversationId::between(self_id, other_id);
        let other_participant = ParticipantSnapshot::from(&other_profile);

        match self.conversations_repo.get(self_id, &conversation_id).await? {
            Some(existing) => {
                if existing.other_participant != other_participant {
                    if let Err(err) = self
                        .conversations_repo
                        .set_participant_snapshot(self_id, &conversation_id, &other_participant)
                        .await
                    {
                        warn!("Failed to refresh participant of {conversation_id}. {err}");
                    }
                }
            }
            None => {
                let now = self.time_provider.now();
                let conversation = Conversation {
                    id: conversation_id.clone(),
                    members: Conversation::sorted_members(self_id, other_id),
                    created_at: now,
                    last_message_at: now,
                    last_message: String::new(),
                    unread_count: 0,
                    other_participant: other_participant.clone(),
                };
                self.conversations_repo
                    .create(self_id, &conversation)
                    .await?;
                info!("Created conversation {conversation_id}.");

                // The other side sees us as their other participant.
                let mirror = Conversation {
                    other_participant: ParticipantSnapshot::from(&self_profile),
                    ..conversation
                };
                if let Err(err) = self
                    .conversations_repo
                    .merge_identity(other_id, &mirror)
                    .await
                {
                    warn!(
                        "Could not create {conversation_id} for {other_id}, \
                        it will be created on first delivery. {err}"
                    );
                }
            }
        }

        Ok(ResolvedConversation {
            conversation_id,
            other_participant,
        })
    }

    async fn load_conversations(&self, self_id: &UserId) -> Result<Vec<Conversation>> {
        self.conversations_repo.get_all(self_id).await
    }
}

impl ConversationDirectoryService {
    async fn load_profile(&self, user_id: &UserId) -> Result<UserProfile, ConversationError> {
        self.user_profile_repo
            .get(user_id)
            .await?
            .ok_or_else(|| ConversationError::ParticipantNotFound(user_id.clone()))
    }
}
