// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::notifications::models::{DeliveryIntent, DeliveryIntentId, NewDeliveryIntent};
use crate::domain::shared::models::{Feed, UserId};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait DeliveryIntentsRepository: Send + Sync {
    /// Queues an intent. Its `sent_at` is assigned by the store.
    async fn enqueue(&self, intent: &NewDeliveryIntent) -> Result<DeliveryIntentId>;

    /// Deletes an intent. Retiring an unknown intent succeeds.
    async fn retire(&self, id: &DeliveryIntentId) -> Result<()>;

    /// The intents currently queued for `recipient`, oldest first.
    async fn pending_for(&self, recipient: &UserId) -> Result<Vec<DeliveryIntent>>;

    /// Emits the full list of intents queued for `recipient` whenever it changes.
    fn subscribe_pending(&self, recipient: &UserId) -> Result<Feed<Vec<DeliveryIntent>>>;
}
