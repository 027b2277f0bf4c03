// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;

use stride_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynIDProvider, DynMessageRelayService, DynMessagesRepository,
    DynReadStateTracker, DynTimeProvider,
};
use crate::app::services::message_subscription::SubscriptionContext;
use crate::app::services::MessageSubscription;
use crate::dtos::{
    ConversationId, Message, MessageId, MessageListItem, SendMessageError, SendMessageRequest,
    UserId,
};

#[derive(InjectDependencies)]
pub struct MessagesService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    id_provider: DynIDProvider,
    #[inject]
    message_relay_service: DynMessageRelayService,
    #[inject]
    messages_repo: DynMessagesRepository,
    #[inject]
    read_state_tracker: DynReadStateTracker,
    #[inject]
    time_provider: DynTimeProvider,
}

impl MessagesService {
    /// Sends a message. Succeeds once the message is stored in the sender's mailbox, delivery to
    /// the recipient happens in the background.
    pub async fn send(&self, request: SendMessageRequest) -> Result<MessageId, SendMessageError> {
        self.message_relay_service.send(request).await
    }

    /// Loads all messages of a conversation in `self_id`'s mailbox, oldest first.
    pub async fn load_messages(
        &self,
        self_id: &UserId,
        conversation_id: &ConversationId,
    ) -> Result<Vec<Message>> {
        self.messages_repo.get_all(self_id, conversation_id).await
    }

    /// Observes the messages of a conversation. `on_update` receives the full reconciled list
    /// whenever it changes. Must be called within a Tokio runtime.
    pub fn subscribe(
        &self,
        self_id: &UserId,
        conversation_id: &ConversationId,
        on_update: impl Fn(Vec<MessageListItem>) + Send + Sync + 'static,
    ) -> Result<MessageSubscription> {
        let feed = self.messages_repo.subscribe(self_id, conversation_id)?;

        let ctx = SubscriptionContext {
            user_id: self_id.clone(),
            conversation_id: conversation_id.clone(),
            id_provider: self.id_provider.clone(),
            time_provider: self.time_provider.clone(),
            read_state_tracker: self
                .ctx
                .config
                .mark_read_on_receive
                .then(|| self.read_state_tracker.clone()),
        };

        Ok(MessageSubscription::start(feed, ctx, Arc::new(on_update)))
    }
}
