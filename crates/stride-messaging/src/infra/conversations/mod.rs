// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation_record::{ConversationRecord, ParticipantRecord};
pub use store_conversations_repository::StoreConversationsRepository;

mod conversation_record;
mod store_conversations_repository;
