// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::UserId;
use crate::domain::user_profiles::models::UserProfile;

/// Display name, falling back to the username and finally to the user id.
pub(crate) fn build_display_name(user_id: &UserId, profile: &UserProfile) -> String {
    [&profile.display_name, &profile.username]
        .into_iter()
        .flatten()
        .map(|name| name.trim())
        .find(|name| !name.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| user_id.to_string())
}
