// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_record::MessageRecord;
pub use store_messages_repository::StoreMessagesRepository;

mod message_record;
mod store_messages_repository;
