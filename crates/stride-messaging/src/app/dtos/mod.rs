// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::conversations::models::{
    Conversation, ConversationError, ParticipantSnapshot, ResolvedConversation,
};
pub use crate::domain::messaging::models::{
    ClientNonce, LocalEcho, Message, MessageId, MessageListItem, SendMessageError,
    SendMessageRequest,
};
pub use crate::domain::notifications::models::DeliveryIntentId;
pub use crate::domain::shared::models::{ConversationId, UserId};
pub use crate::domain::user_profiles::models::UserProfile;
