// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use stride_store::prelude::*;

use crate::domain::conversations::models::{Conversation, ParticipantSnapshot};
use crate::domain::conversations::repos::ConversationsRepository;
use crate::domain::shared::models::{ConversationId, UserId};
use crate::infra::general::StoreLayout;

use super::conversation_record::columns;
use super::{ConversationRecord, ParticipantRecord};

pub struct StoreConversationsRepository {
    store: Arc<dyn DocumentStore>,
    layout: StoreLayout,
}

impl StoreConversationsRepository {
    pub fn new(store: Arc<dyn DocumentStore>, layout: StoreLayout) -> Self {
        Self { store, layout }
    }
}

#[async_trait]
impl ConversationsRepository for StoreConversationsRepository {
    async fn get(&self, owner: &UserId, id: &ConversationId) -> Result<Option<Conversation>> {
        let Some(document) = self.store.get(&self.layout.conversation(owner, id)).await? else {
            return Ok(None);
        };
        Ok(Some(document.decode::<ConversationRecord>()?.into()))
    }

    async fn get_all(&self, owner: &UserId) -> Result<Vec<Conversation>> {
        let snapshot = self
            .store
            .query(&Query::new(self.layout.conversations(owner)))
            .await?;

        let mut conversations = snapshot
            .documents
            .iter()
            .map(|document| -> Result<Conversation> {
                Ok(document.decode::<ConversationRecord>()?.into())
            })
            .collect::<Result<Vec<_>>>()?;

        // Sorted here rather than by the store so that copies without a timestamp are kept.
        conversations.sort_by(|lhs, rhs| rhs.last_message_at.cmp(&lhs.last_message_at));
        Ok(conversations)
    }

    async fn create(&self, owner: &UserId, conversation: &Conversation) -> Result<()> {
        let fields = WriteFields::from_serializable(&ConversationRecord::from(conversation))?;
        self.store
            .set(
                &self.layout.conversation(owner, &conversation.id),
                fields,
                SetOptions::overwrite(),
            )
            .await?;
        Ok(())
    }

    async fn merge_identity(&self, owner: &UserId, conversation: &Conversation) -> Result<()> {
        let fields = WriteFields::new()
            .set(columns::ID, conversation.id.as_str())
            .set(
                columns::MEMBERS,
                serde_json::to_value(&conversation.members)?,
            )
            .set(
                columns::OTHER_PARTICIPANT,
                participant_value(&conversation.other_participant)?,
            );
        self.store
            .set(
                &self.layout.conversation(owner, &conversation.id),
                fields,
                SetOptions::merge(),
            )
            .await?;
        Ok(())
    }

    async fn set_participant_snapshot(
        &self,
        owner: &UserId,
        id: &ConversationId,
        snapshot: &ParticipantSnapshot,
    ) -> Result<()> {
        let fields =
            WriteFields::new().set(columns::OTHER_PARTICIPANT, participant_value(snapshot)?);
        self.store
            .update(&self.layout.conversation(owner, id), fields)
            .await?;
        Ok(())
    }

    async fn record_sent_message(
        &self,
        owner: &UserId,
        id: &ConversationId,
        preview: &str,
    ) -> Result<()> {
        let fields = WriteFields::new()
            .set(columns::LAST_MESSAGE, preview)
            .server_timestamp(columns::LAST_MESSAGE_AT);
        self.store
            .update(&self.layout.conversation(owner, id), fields)
            .await?;
        Ok(())
    }

    async fn record_received_message(
        &self,
        owner: &UserId,
        id: &ConversationId,
        preview: Option<String>,
        sent_at: DateTime<Utc>,
    ) -> Result<()> {
        let mut fields = WriteFields::new().increment(columns::UNREAD_COUNT, 1);
        if let Some(preview) = preview {
            fields = fields
                .set(columns::LAST_MESSAGE, preview)
                .set(columns::LAST_MESSAGE_AT, sent_at.timestamp_micros());
        }
        self.store
            .update(&self.layout.conversation(owner, id), fields)
            .await?;
        Ok(())
    }

    async fn reset_unread_count(&self, owner: &UserId, id: &ConversationId) -> Result<()> {
        let fields = WriteFields::new().set(columns::UNREAD_COUNT, 0);
        self.store
            .update(&self.layout.conversation(owner, id), fields)
            .await?;
        Ok(())
    }
}

fn participant_value(snapshot: &ParticipantSnapshot) -> Result<Value> {
    Ok(serde_json::to_value(ParticipantRecord::from(snapshot))?)
}
