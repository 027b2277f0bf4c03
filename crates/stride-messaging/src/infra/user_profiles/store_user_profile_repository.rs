// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use stride_store::prelude::*;

use crate::domain::shared::models::UserId;
use crate::domain::user_profiles::models::UserProfile;
use crate::domain::user_profiles::repos::UserProfileRepository;
use crate::infra::general::StoreLayout;

use super::UserProfileRecord;

pub struct StoreUserProfileRepository {
    store: Arc<dyn DocumentStore>,
    layout: StoreLayout,
}

impl StoreUserProfileRepository {
    pub fn new(store: Arc<dyn DocumentStore>, layout: StoreLayout) -> Self {
        Self { store, layout }
    }
}

#[async_trait]
impl UserProfileRepository for StoreUserProfileRepository {
    async fn get(&self, user_id: &UserId) -> Result<Option<UserProfile>> {
        if !user_id.is_valid() {
            return Ok(None);
        }

        let Some(document) = self.store.get(&self.layout.profile(user_id)).await? else {
            return Ok(None);
        };

        Ok(Some(
            document
                .decode::<UserProfileRecord>()?
                .into_profile(user_id.clone()),
        ))
    }
}
