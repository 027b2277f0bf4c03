// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversation_id::ConversationId;
pub use feed::{Feed, FeedCanceller};
pub use user_id::UserId;

mod conversation_id;
mod feed;
mod user_id;
