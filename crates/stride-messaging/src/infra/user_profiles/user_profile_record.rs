// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserId;
use crate::domain::user_profiles::models::UserProfile;

/// The public part of a user document. Other fields of the document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileRecord {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl UserProfileRecord {
    pub fn into_profile(self, id: UserId) -> UserProfile {
        UserProfile {
            id,
            display_name: self.display_name,
            username: self.username,
            photo_url: self.photo_url,
        }
    }
}
