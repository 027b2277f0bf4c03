// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use local_echo::LocalEcho;
pub use message::{Message, MessageChange, NewMessage};
pub use message_ids::{ClientNonce, MessageId};
pub use message_list::{MessageList, MessageListItem, Reconciliation};
pub use send_message_error::SendMessageError;
pub use send_message_request::SendMessageRequest;

mod local_echo;
mod message;
mod message_ids;
mod message_list;
mod send_message_error;
mod send_message_request;
