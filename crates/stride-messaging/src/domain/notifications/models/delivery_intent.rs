// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use strum_macros::Display;

use stride_utils::id_string;

use crate::domain::messaging::models::MessageId;
use crate::domain::shared::models::{ConversationId, UserId};

id_string!(DeliveryIntentId);

impl DeliveryIntentId {
    /// The id under which the recipient's copy of the message is stored when intents are
    /// deduplicated.
    pub fn message_id(&self) -> MessageId {
        MessageId::from(self.as_str())
    }
}

/// A queued request to copy a message into its recipient's mailbox.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryIntent {
    pub id: DeliveryIntentId,
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDeliveryIntent {
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub text: String,
}

/// Lifecycle of an intent on the recipient's side. An intent that fails to apply goes back to
/// `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DeliveryIntentState {
    Pending,
    Applying,
    AppliedAndRetired,
}
