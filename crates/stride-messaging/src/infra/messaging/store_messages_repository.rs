// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use futures::StreamExt;
use tracing::warn;

use stride_store::prelude::*;

use crate::domain::messaging::models::{Message, MessageChange, MessageId, NewMessage};
use crate::domain::messaging::repos::MessagesRepository;
use crate::domain::shared::models::{ConversationId, Feed, UserId};
use crate::infra::general::StoreLayout;

use super::message_record::columns;
use super::MessageRecord;

pub struct StoreMessagesRepository {
    store: Arc<dyn DocumentStore>,
    layout: StoreLayout,
}

impl StoreMessagesRepository {
    pub fn new(store: Arc<dyn DocumentStore>, layout: StoreLayout) -> Self {
        Self { store, layout }
    }

    fn ordered_query(&self, owner: &UserId, conversation_id: &ConversationId) -> Query {
        Query::new(self.layout.messages(owner, conversation_id))
            .order_by(columns::CREATED_AT, Direction::Ascending)
    }
}

#[async_trait]
impl MessagesRepository for StoreMessagesRepository {
    async fn append(
        &self,
        owner: &UserId,
        conversation_id: &ConversationId,
        message: &NewMessage,
    ) -> Result<MessageId> {
        let id = self
            .store
            .add(
                &self.layout.messages(owner, conversation_id),
                MessageRecord::write_fields(message),
            )
            .await?;
        Ok(MessageId::from(id.into_inner()))
    }

    async fn put(
        &self,
        owner: &UserId,
        conversation_id: &ConversationId,
        id: &MessageId,
        message: &NewMessage,
    ) -> Result<()> {
        self.store
            .set(
                &self.layout.message(owner, conversation_id, id),
                MessageRecord::write_fields(message),
                SetOptions::overwrite(),
            )
            .await?;
        Ok(())
    }

    async fn contains(
        &self,
        owner: &UserId,
        conversation_id: &ConversationId,
        id: &MessageId,
    ) -> Result<bool> {
        Ok(self
            .store
            .get(&self.layout.message(owner, conversation_id, id))
            .await?
            .is_some())
    }

    async fn get_all(
        &self,
        owner: &UserId,
        conversation_id: &ConversationId,
    ) -> Result<Vec<Message>> {
        let snapshot = self
            .store
            .query(&self.ordered_query(owner, conversation_id))
            .await?;

        Ok(snapshot
            .documents
            .iter()
            .filter_map(|document| match MessageRecord::decode(document) {
                Ok(message) => Some(message),
                Err(err) => {
                    warn!("Skipping malformed message {}. {err}", document.path);
                    None
                }
            })
            .collect())
    }

    fn subscribe(
        &self,
        owner: &UserId,
        conversation_id: &ConversationId,
    ) -> Result<Feed<Vec<MessageChange>>> {
        let (snapshots, registration) = self
            .store
            .subscribe(self.ordered_query(owner, conversation_id))?
            .into_parts();
        let registration = Arc::new(registration);

        let changes = snapshots.map(|snapshot| -> Result<Vec<MessageChange>> {
            Ok(decode_changes(&snapshot?.changes))
        });

        Ok(Feed::new(changes, move || registration.remove()))
    }
}

/// Malformed messages are skipped so that the rest of the batch still reaches the list.
fn decode_changes(changes: &[DocumentChange]) -> Vec<MessageChange> {
    changes
        .iter()
        .filter_map(|change| {
            let decoded = match change.kind {
                ChangeKind::Added => {
                    MessageRecord::decode(&change.document).map(MessageChange::Added)
                }
                ChangeKind::Modified => {
                    MessageRecord::decode(&change.document).map(MessageChange::Modified)
                }
                ChangeKind::Removed => Ok(MessageChange::Removed(MessageId::from(
                    change.document.id().as_str(),
                ))),
            };
            match decoded {
                Ok(change) => Some(change),
                Err(err) => {
                    warn!("Skipping malformed message {}. {err}", change.document.path);
                    None
                }
            }
        })
        .collect()
}
