// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stride_store::prelude::*;

use crate::domain::notifications::models::{DeliveryIntent, DeliveryIntentId, NewDeliveryIntent};
use crate::domain::shared::models::{ConversationId, UserId};

/// A delivery intent as stored under `notifications/{iid}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryIntentRecord {
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub text: String,
    #[serde(with = "chrono::serde::ts_microseconds")]
    pub sent_at: DateTime<Utc>,
}

pub(super) mod columns {
    pub const CONVERSATION_ID: &str = "conversationId";
    pub const SENDER_ID: &str = "senderId";
    /// Must match the recipient field the store's access policy checks.
    pub const RECIPIENT_ID: &str = "recipientId";
    pub const TEXT: &str = "text";
    pub const SENT_AT: &str = "sentAt";
}

impl DeliveryIntentRecord {
    pub fn write_fields(intent: &NewDeliveryIntent) -> WriteFields {
        WriteFields::new()
            .set(columns::CONVERSATION_ID, intent.conversation_id.as_str())
            .set(columns::SENDER_ID, intent.sender_id.as_str())
            .set(columns::RECIPIENT_ID, intent.recipient_id.as_str())
            .set(columns::TEXT, intent.text.as_str())
            .server_timestamp(columns::SENT_AT)
    }

    pub fn decode(document: &Document) -> anyhow::Result<DeliveryIntent> {
        let record = document.decode::<DeliveryIntentRecord>()?;
        Ok(DeliveryIntent {
            id: DeliveryIntentId::from(document.id().as_str()),
            conversation_id: record.conversation_id,
            sender_id: record.sender_id,
            recipient_id: record.recipient_id,
            text: record.text,
            sent_at: record.sent_at,
        })
    }
}
