// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation::{Conversation, ResolvedConversation};
pub use conversation_error::ConversationError;
pub use participant_snapshot::ParticipantSnapshot;

mod conversation;
mod conversation_error;
mod participant_snapshot;
