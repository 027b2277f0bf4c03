// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::ClientNonce;
use crate::domain::shared::models::{ConversationId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageRequest {
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub text: String,
    /// The nonce of the local echo shown for this message, if any.
    pub nonce: Option<ClientNonce>,
}
