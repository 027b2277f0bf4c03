// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::conversations::models::ParticipantSnapshot;
use crate::domain::shared::models::{ConversationId, UserId};

/// One participant's private copy of a conversation's metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub members: Vec<UserId>,
    pub created_at: DateTime<Utc>,
    pub last_message_at: DateTime<Utc>,
    pub last_message: String,
    /// Only ever incremented by delivery processing on the owner's side.
    pub unread_count: u32,
    /// Cached profile of the other member. Not a source of truth.
    pub other_participant: ParticipantSnapshot,
}

impl Conversation {
    /// Members are stored sorted so that both copies list them in the same order.
    pub fn sorted_members(lhs: &UserId, rhs: &UserId) -> Vec<UserId> {
        let mut members = vec![lhs.clone(), rhs.clone()];
        members.sort();
        members
    }

    pub fn other_member(&self, user_id: &UserId) -> Option<&UserId> {
        self.members.iter().find(|member| *member != user_id)
    }
}

/// The outcome of resolving a conversation for the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConversation {
    pub conversation_id: ConversationId,
    pub other_participant: ParticipantSnapshot,
}
