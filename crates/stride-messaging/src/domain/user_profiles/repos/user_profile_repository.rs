// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::UserId;
use crate::domain::user_profiles::models::UserProfile;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UserProfileRepository: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<Option<UserProfile>>;
}
