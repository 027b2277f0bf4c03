// stride/stride-messaging-integration-tests
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::time::Duration;

use anyhow::{bail, Result};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::time::timeout;

use stride_messaging::app::deps::AppConfig;
use stride_messaging::dtos::{
    ClientNonce, ConversationId, MessageId, MessageListItem, SendMessageError,
    SendMessageRequest, UserId,
};
use stride_messaging::services::MessageSubscription;
use stride_messaging::{Client, ClientDelegate, ClientEvent};
use stride_store::prelude::InMemoryClient;

const TIMEOUT: Duration = Duration::from_secs(2);

pub struct TestClient {
    pub client: Client,
    pub user_id: UserId,
    events: UnboundedReceiver<ClientEvent>,
}

struct ChannelDelegate(UnboundedSender<ClientEvent>);

impl ClientDelegate for ChannelDelegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        _ = self.0.send(event);
    }
}

impl TestClient {
    pub fn new(store: InMemoryClient, user_id: UserId) -> Self {
        let (tx, events) = unbounded_channel();

        let client = Client::builder()
            .set_store(store)
            .set_config(AppConfig {
                intent_retry_interval: Some(Duration::from_millis(50)),
                ..Default::default()
            })
            .set_delegate(Some(Box::new(ChannelDelegate(tx))))
            .build();

        Self {
            client,
            user_id,
            events,
        }
    }
}

impl TestClient {
    pub async fn resolve(&self, other: &str) -> Result<ConversationId> {
        Ok(self
            .conversations
            .resolve_or_create(&self.user_id, &other.into())
            .await?
            .conversation_id)
    }

    pub async fn send(
        &self,
        conversation_id: &ConversationId,
        recipient: &str,
        text: &str,
        nonce: Option<ClientNonce>,
    ) -> Result<MessageId, SendMessageError> {
        self.messages
            .send(SendMessageRequest {
                conversation_id: conversation_id.clone(),
                sender_id: self.user_id.clone(),
                recipient_id: recipient.into(),
                text: text.to_string(),
                nonce,
            })
            .await
    }

    pub fn subscribe(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<(MessageSubscription, UpdateReceiver)> {
        let (tx, rx) = unbounded_channel();
        let subscription = self
            .messages
            .subscribe(&self.user_id, conversation_id, move |items| {
                _ = tx.send(items);
            })?;
        Ok((subscription, UpdateReceiver(rx)))
    }

    pub async fn unread_count(&self, conversation_id: &ConversationId) -> Result<u32> {
        let conversations = self.conversations.load_conversations(&self.user_id).await?;
        let Some(conversation) = conversations.iter().find(|c| &c.id == conversation_id) else {
            bail!("{} has no conversation {conversation_id}.", self.user_id)
        };
        Ok(conversation.unread_count)
    }

    /// Waits until a delivered message was applied to one of this user's conversations.
    pub async fn wait_for_conversation_change(&mut self) -> Result<ConversationId> {
        loop {
            match timeout(TIMEOUT, self.events.recv()).await? {
                Some(ClientEvent::ConversationChanged { conversation_id }) => {
                    return Ok(conversation_id)
                }
                Some(_) => continue,
                None => bail!("Event channel closed."),
            }
        }
    }
}

impl Deref for TestClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub struct UpdateReceiver(UnboundedReceiver<Vec<MessageListItem>>);

impl UpdateReceiver {
    /// Waits for the first update whose items satisfy `predicate`.
    pub async fn wait_for(
        &mut self,
        predicate: impl Fn(&[MessageListItem]) -> bool,
    ) -> Result<Vec<MessageListItem>> {
        loop {
            match timeout(TIMEOUT, self.0.recv()).await? {
                Some(items) if predicate(&items) => return Ok(items),
                Some(_) => continue,
                None => bail!("Subscription closed."),
            }
        }
    }

    pub fn try_next(&mut self) -> Option<Vec<MessageListItem>> {
        self.0.try_recv().ok()
    }
}

pub fn texts(items: &[MessageListItem]) -> Vec<&str> {
    items.iter().map(MessageListItem::text).collect()
}
