// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation_directory_service::{
    ConversationDirectoryService, ConversationDirectoryServiceDependencies,
};
pub use read_state_tracker::{ReadStateTracker, ReadStateTrackerDependencies};

mod conversation_directory_service;
mod read_state_tracker;
