// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversations_repository::ConversationsRepository;

mod conversations_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::conversations_repository::MockConversationsRepository;
}
