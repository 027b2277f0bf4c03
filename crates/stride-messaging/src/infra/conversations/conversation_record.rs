// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::conversations::models::{Conversation, ParticipantSnapshot};
use crate::domain::shared::models::{ConversationId, UserId};

/// A conversation copy as stored under `users/{uid}/conversations/{cid}`.
///
/// Copies created on the other participant's behalf may only carry the identity fields, so
/// everything else falls back to defaults when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    pub id: ConversationId,
    pub members: Vec<UserId>,
    #[serde(default, with = "chrono::serde::ts_microseconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_microseconds_option")]
    pub last_message_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_message: String,
    #[serde(default)]
    pub unread_count: i64,
    #[serde(default)]
    pub other_participant: ParticipantRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRecord {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

pub(super) mod columns {
    pub const ID: &str = "id";
    pub const MEMBERS: &str = "members";
    pub const LAST_MESSAGE: &str = "lastMessage";
    pub const LAST_MESSAGE_AT: &str = "lastMessageAt";
    pub const UNREAD_COUNT: &str = "unreadCount";
    pub const OTHER_PARTICIPANT: &str = "otherParticipant";
}

impl From<&Conversation> for ConversationRecord {
    fn from(value: &Conversation) -> Self {
        Self {
            id: value.id.clone(),
            members: value.members.clone(),
            created_at: Some(value.created_at),
            last_message_at: Some(value.last_message_at),
            last_message: value.last_message.clone(),
            unread_count: i64::from(value.unread_count),
            other_participant: ParticipantRecord::from(&value.other_participant),
        }
    }
}

impl From<ConversationRecord> for Conversation {
    fn from(value: ConversationRecord) -> Self {
        let created_at = value
            .created_at
            .or(value.last_message_at)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

        Self {
            id: value.id,
            members: value.members,
            created_at,
            last_message_at: value.last_message_at.unwrap_or(created_at),
            last_message: value.last_message,
            unread_count: u32::try_from(value.unread_count.max(0)).unwrap_or(u32::MAX),
            other_participant: value.other_participant.into(),
        }
    }
}

impl From<&ParticipantSnapshot> for ParticipantRecord {
    fn from(value: &ParticipantSnapshot) -> Self {
        Self {
            display_name: value.display_name.clone(),
            username: value.username.clone(),
            photo_url: value.photo_url.clone(),
        }
    }
}

impl From<ParticipantRecord> for ParticipantSnapshot {
    fn from(value: ParticipantRecord) -> Self {
        Self {
            display_name: value.display_name,
            username: value.username,
            photo_url: value.photo_url,
        }
    }
}
