// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use anyhow::{Context, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use stride_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynConversationsRepository, DynDeliveryIntentsRepository,
    DynMessagesRepository, DynUserProfileRepository,
};
use crate::domain::conversations::models::{Conversation, ParticipantSnapshot};
use crate::domain::messaging::models::NewMessage;
use crate::domain::notifications::models::{
    DeliveryIntent, DeliveryIntentId, DeliveryIntentState, ProcessingOutcome,
};
use crate::domain::shared::utils::build_message_preview;

use super::super::NotificationProcessor as NotificationProcessorTrait;

#[derive(DependenciesStruct)]
pub struct NotificationProcessor {
    ctx: DynAppContext,
    conversations_repo: DynConversationsRepository,
    delivery_intents_repo: DynDeliveryIntentsRepository,
    messages_repo: DynMessagesRepository,
    user_profile_repo: DynUserProfileRepository,
    /// Intents whose conversation update landed but which are not retired yet. A retry of
    /// one of these must not count the message as unread a second time.
    updated_conversations: Mutex<HashSet<DeliveryIntentId>>,
}

#[async_trait]
impl NotificationProcessorTrait for NotificationProcessor {
    #[tracing::instrument(skip(self, intent), fields(intent_id = %intent.id))]
    async fn process(&self, intent: &DeliveryIntent) -> Result<ProcessingOutcome> {
        debug!(state = %DeliveryIntentState::Pending, "Processing delivery intent.");

        let deduplicate = self.ctx.config.deduplicate_intents;

        if deduplicate
            && self
                .messages_repo
                .contains(
                    &intent.recipient_id,
                    &intent.conversation_id,
                    &intent.id.message_id(),
                )
                .await?
        {
            self.retire(intent).await?;
            return Ok(ProcessingOutcome::AlreadyApplied);
        }

        debug!(state = %DeliveryIntentState::Applying, "Applying delivery intent.");

        if let Err(err) = self.apply(intent).await {
            warn!(
                state = %DeliveryIntentState::Pending,
                "Failed to apply delivery intent. Will retry. {err}"
            );
            return Err(err);
        }

        self.retire(intent).await?;
        Ok(ProcessingOutcome::Applied)
    }
}

impl NotificationProcessor {
    async fn apply(&self, intent: &DeliveryIntent) -> Result<()> {
        if !self.updated_conversations.lock().contains(&intent.id) {
            self.update_conversation(intent).await?;
            self.updated_conversations.lock().insert(intent.id.clone());
        }

        let message = NewMessage {
            text: intent.text.clone(),
            sender_id: intent.sender_id.clone(),
            created_at: Some(intent.sent_at),
            nonce: None,
        };

        if self.ctx.config.deduplicate_intents {
            self.messages_repo
                .put(
                    &intent.recipient_id,
                    &intent.conversation_id,
                    &intent.id.message_id(),
                    &message,
                )
                .await
                .context("Failed to store recipient's message")?;
        } else {
            self.messages_repo
                .append(&intent.recipient_id, &intent.conversation_id, &message)
                .await
                .context("Failed to store recipient's message")?;
        }

        Ok(())
    }

    async fn update_conversation(&self, intent: &DeliveryIntent) -> Result<()> {
        let recipient = &intent.recipient_id;
        let preview =
            build_message_preview(&intent.text, self.ctx.config.message_preview_max_chars);

        match self
            .conversations_repo
            .get(recipient, &intent.conversation_id)
            .await?
        {
            None => {
                let conversation = Conversation {
                    id: intent.conversation_id.clone(),
                    members: Conversation::sorted_members(&intent.sender_id, recipient),
                    created_at: intent.sent_at,
                    last_message_at: intent.sent_at,
                    last_message: preview,
                    unread_count: 1,
                    other_participant: self.load_sender_snapshot(intent).await,
                };
                self.conversations_repo
                    .create(recipient, &conversation)
                    .await
                    .context("Failed to create recipient's conversation")?;
                info!("Created conversation {} on delivery.", intent.conversation_id);
            }
            Some(existing) => {
                // Intents may be applied out of order. Only a newer message replaces the preview.
                let preview = (intent.sent_at >= existing.last_message_at).then_some(preview);
                self.conversations_repo
                    .record_received_message(
                        recipient,
                        &intent.conversation_id,
                        preview,
                        intent.sent_at,
                    )
                    .await
                    .context("Failed to update recipient's conversation")?;
            }
        }

        Ok(())
    }

    async fn retire(&self, intent: &DeliveryIntent) -> Result<()> {
        self.delivery_intents_repo
            .retire(&intent.id)
            .await
            .context("Failed to retire delivery intent")?;
        self.updated_conversations.lock().remove(&intent.id);
        debug!(state = %DeliveryIntentState::AppliedAndRetired, "Retired delivery intent.");
        Ok(())
    }

    async fn load_sender_snapshot(&self, intent: &DeliveryIntent) -> ParticipantSnapshot {
        match self.user_profile_repo.get(&intent.sender_id).await {
            Ok(Some(profile)) => ParticipantSnapshot::from(&profile),
            Ok(None) => ParticipantSnapshot::placeholder(&intent.sender_id),
            Err(err) => {
                warn!("Failed to load profile of {}. {err}", intent.sender_id);
                ParticipantSnapshot::placeholder(&intent.sender_id)
            }
        }
    }
}
