// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conversations_service::ConversationsService;
pub use message_subscription::MessageSubscription;
pub use messages_service::MessagesService;
pub use session_service::SessionService;

mod conversations_service;
mod message_subscription;
mod messages_service;
mod session_service;
