// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use stride_store::prelude::*;

use crate::app::deps::AppConfig;
use crate::domain::messaging::models::MessageId;
use crate::domain::notifications::models::DeliveryIntentId;
use crate::domain::shared::models::{ConversationId, UserId};

/// Where the messaging data lives in the document store.
///
/// ```text
/// users/{uid}                                        profile
/// users/{uid}/conversations/{cid}                    the user's copy of a conversation
/// users/{uid}/conversations/{cid}/messages/{mid}     the user's copy of a message
/// notifications/{iid}                                delivery intents
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreLayout {
    users: String,
    conversations: String,
    messages: String,
    notifications: String,
}

impl StoreLayout {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            users: config.users_collection.clone(),
            conversations: config.conversations_collection.clone(),
            messages: config.messages_collection.clone(),
            notifications: config.notifications_collection.clone(),
        }
    }

    pub fn profile(&self, user_id: &UserId) -> DocumentPath {
        CollectionPath::new(&self.users).doc(user_id)
    }

    pub fn conversations(&self, owner: &UserId) -> CollectionPath {
        self.profile(owner).collection(&self.conversations)
    }

    pub fn conversation(&self, owner: &UserId, id: &ConversationId) -> DocumentPath {
        self.conversations(owner).doc(id)
    }

    pub fn messages(&self, owner: &UserId, conversation_id: &ConversationId) -> CollectionPath {
        self.conversation(owner, conversation_id)
            .collection(&self.messages)
    }

    pub fn message(
        &self,
        owner: &UserId,
        conversation_id: &ConversationId,
        id: &MessageId,
    ) -> DocumentPath {
        self.messages(owner, conversation_id).doc(id)
    }

    pub fn notifications(&self) -> CollectionPath {
        CollectionPath::new(&self.notifications)
    }

    pub fn notification(&self, id: &DeliveryIntentId) -> DocumentPath {
        self.notifications().doc(id)
    }
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
