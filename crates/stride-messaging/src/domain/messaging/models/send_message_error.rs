// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(thiserror::Error, Debug)]
pub enum SendMessageError {
    #[error("Cannot send an empty message.")]
    EmptyMessage,
    #[error("Missing conversation id.")]
    MissingConversationId,
    #[error("Failed to deliver message. {0}")]
    DeliveryFailed(anyhow::Error),
}
