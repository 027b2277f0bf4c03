// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation_directory_service::ConversationDirectoryService;
pub use read_state_tracker::ReadStateTracker;

mod conversation_directory_service;
pub mod impls;
mod read_state_tracker;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::conversation_directory_service::MockConversationDirectoryService;
    pub use super::read_state_tracker::MockReadStateTracker;
}
