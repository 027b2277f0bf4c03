// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{ConversationId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// A delivered message was applied to one of the session user's conversations.
    ConversationChanged { conversation_id: ConversationId },

    /// A notification session was started or ended.
    SessionStateChanged { state: SessionState },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Started { user_id: UserId },
    Ended { user_id: UserId },
}
