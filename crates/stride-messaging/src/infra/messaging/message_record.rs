// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stride_store::prelude::*;

use crate::domain::messaging::models::{ClientNonce, Message, MessageId, NewMessage};
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub text: String,
    pub sender_id: UserId,
    #[serde(with = "chrono::serde::ts_microseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<ClientNonce>,
}

pub(super) mod columns {
    pub const TEXT: &str = "text";
    pub const SENDER_ID: &str = "senderId";
    pub const CREATED_AT: &str = "createdAt";
    pub const NONCE: &str = "nonce";
}

impl MessageRecord {
    pub fn into_message(self, id: MessageId) -> Message {
        Message {
            id,
            text: self.text,
            sender_id: self.sender_id,
            created_at: self.created_at,
            nonce: self.nonce,
        }
    }

    /// The writes for a new message. Without an explicit creation time the store's clock is used.
    pub fn write_fields(message: &NewMessage) -> WriteFields {
        let mut fields = WriteFields::new()
            .set(columns::TEXT, message.text.as_str())
            .set(columns::SENDER_ID, message.sender_id.as_str());

        fields = match message.created_at {
            Some(created_at) => fields.set(columns::CREATED_AT, created_at.timestamp_micros()),
            None => fields.server_timestamp(columns::CREATED_AT),
        };

        if let Some(nonce) = &message.nonce {
            fields = fields.set(columns::NONCE, nonce.as_str());
        }

        fields
    }

    pub fn decode(document: &Document) -> anyhow::Result<Message> {
        let record = document.decode::<MessageRecord>()?;
        Ok(record.into_message(MessageId::from(document.id().as_str())))
    }
}
