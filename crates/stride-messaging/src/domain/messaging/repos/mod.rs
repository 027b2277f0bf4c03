// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use messages_repository::MessagesRepository;

mod messages_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::messages_repository::MockMessagesRepository;
}
