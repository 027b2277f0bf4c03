// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use tracing::{debug, warn};

use stride_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynConversationsRepository, DynDeliveryIntentsRepository,
    DynMessagesRepository,
};
use crate::domain::messaging::models::{
    MessageId, NewMessage, SendMessageError, SendMessageRequest,
};
use crate::domain::notifications::models::NewDeliveryIntent;
use crate::domain::shared::utils::build_message_preview;

use super::super::MessageRelayService as MessageRelayServiceTrait;

#[derive(DependenciesStruct)]
pub struct MessageRelayService {
    ctx: DynAppContext,
    conversations_repo: DynConversationsRepository,
    delivery_intents_repo: DynDeliveryIntentsRepository,
    messages_repo: DynMessagesRepository,
}

#[async_trait]
impl MessageRelayServiceTrait for MessageRelayService {
    #[tracing::instrument(skip(self, request), fields(conversation_id = %request.conversation_id))]
    async fn send(&self, request: SendMessageRequest) -> Result<MessageId, SendMessageError> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(SendMessageError::EmptyMessage);
        }
        if request.conversation_id.is_empty() {
            return Err(SendMessageError::MissingConversationId);
        }

        let message = NewMessage {
            text: text.to_string(),
            sender_id: request.sender_id.clone(),
            created_at: None,
            nonce: request.nonce.clone(),
        };

        // The sender's copy of the message is the only write that has to succeed.
        let message_id = self
            .messages_repo
            .append(&request.sender_id, &request.conversation_id, &message)
            .await
            .map_err(SendMessageError::DeliveryFailed)?;

        let preview = build_message_preview(text, self.ctx.config.message_preview_max_chars);
        if let Err(err) = self
            .conversations_repo
            .record_sent_message(&request.sender_id, &request.conversation_id, &preview)
            .await
        {
            warn!(
                "Failed to update last message of {}. {err}",
                request.conversation_id
            );
        }

        let intent = NewDeliveryIntent {
            conversation_id: request.conversation_id.clone(),
            sender_id: request.sender_id.clone(),
            recipient_id: request.recipient_id.clone(),
            text: text.to_string(),
        };

        match self.delivery_intents_repo.enqueue(&intent).await {
            Ok(intent_id) => debug!("Queued delivery intent {intent_id} for {message_id}."),
            Err(err) => warn!(
                "Failed to queue delivery of {message_id} to {}. {err}",
                request.recipient_id
            ),
        }

        Ok(message_id)
    }
}
