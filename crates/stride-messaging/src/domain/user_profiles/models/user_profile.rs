// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;

/// Public profile fields of a user, owned by the profile collaborator and only read here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub display_name: Option<String>,
    pub username: Option<String>,
    pub photo_url: Option<String>,
}
