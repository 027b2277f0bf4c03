// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;
use crate::domain::shared::utils::build_display_name;
use crate::domain::user_profiles::models::UserProfile;

/// Denormalized display data of the other participant, stored on a conversation copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParticipantSnapshot {
    pub display_name: String,
    pub username: Option<String>,
    pub photo_url: Option<String>,
}

impl ParticipantSnapshot {
    /// Used when a profile can't be loaded. Shows the raw user id.
    pub fn placeholder(user_id: &UserId) -> Self {
        Self {
            display_name: user_id.to_string(),
            username: None,
            photo_url: None,
        }
    }
}

impl From<&UserProfile> for ParticipantSnapshot {
    fn from(profile: &UserProfile) -> Self {
        Self {
            display_name: build_display_name(&profile.id, profile),
            username: profile.username.clone(),
            photo_url: profile.photo_url.clone(),
        }
    }
}
