// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

#[derive(thiserror::Error, Debug)]
pub enum ConversationError {
    #[error("A conversation requires two distinct, valid participants.")]
    InvalidParticipants,
    #[error("No user profile found for '{0}'.")]
    ParticipantNotFound(UserId),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
