// stride/stride-messaging-integration-tests
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use serde_json::json;

use stride_messaging::dtos::{ConversationId, UserId};
use stride_store::prelude::*;

use super::TestClient;

/// A shared in-memory backend with the profiles of Jane, Joe and Kim.
pub struct TestEnv {
    pub store: InMemoryStore,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        let store = InMemoryStore::new();

        let profiles = [("jane", "Jane Doe"), ("joe", "Joe Runner"), ("kim", "Kim")];

        for (uid, display_name) in profiles {
            store.seed(
                &DocumentPath::parse(&format!("users/{uid}"))?,
                json!({ "displayName": display_name, "username": uid }),
            )?;
        }

        Ok(Self { store })
    }

    /// A client authenticated as `user_id`.
    pub fn client(&self, user_id: &str) -> TestClient {
        TestClient::new(self.store.client(user_id), user_id.into())
    }

    /// The texts of all messages in `owner`'s mailbox, bypassing access rules.
    pub fn stored_message_texts(
        &self,
        owner: &UserId,
        conversation_id: &ConversationId,
    ) -> Result<Vec<String>> {
        let collection = CollectionPath::parse(&format!(
            "users/{owner}/conversations/{conversation_id}/messages"
        ))?;

        Ok(self
            .store
            .documents_in(&collection)
            .iter()
            .filter_map(|doc| doc.get("text").and_then(|text| text.as_str()))
            .map(ToString::to_string)
            .collect())
    }

    pub fn pending_intent_count(&self) -> Result<usize> {
        Ok(self
            .store
            .documents_in(&CollectionPath::parse("notifications")?)
            .len())
    }

    /// Waits until every delivery intent has been retired.
    pub async fn wait_until_delivered(&self) -> Result<()> {
        tokio::time::timeout(Duration::from_secs(2), async {
            while self.pending_intent_count()? > 0 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            anyhow::Ok(())
        })
        .await?
    }
}
