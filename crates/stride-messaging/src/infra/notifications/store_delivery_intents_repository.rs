// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use futures::StreamExt;
use tracing::warn;

use stride_store::prelude::*;

use crate::domain::notifications::models::{DeliveryIntent, DeliveryIntentId, NewDeliveryIntent};
use crate::domain::notifications::repos::DeliveryIntentsRepository;
use crate::domain::shared::models::{Feed, UserId};
use crate::infra::general::StoreLayout;

use super::delivery_intent_record::columns;
use super::DeliveryIntentRecord;

pub struct StoreDeliveryIntentsRepository {
    store: Arc<dyn DocumentStore>,
    layout: StoreLayout,
}

impl StoreDeliveryIntentsRepository {
    pub fn new(store: Arc<dyn DocumentStore>, layout: StoreLayout) -> Self {
        Self { store, layout }
    }

    fn pending_query(&self, recipient: &UserId) -> Query {
        Query::new(self.layout.notifications())
            .where_eq(columns::RECIPIENT_ID, recipient.as_str())
            .order_by(columns::SENT_AT, Direction::Ascending)
    }
}

#[async_trait]
impl DeliveryIntentsRepository for StoreDeliveryIntentsRepository {
    async fn enqueue(&self, intent: &NewDeliveryIntent) -> Result<DeliveryIntentId> {
        let id = self
            .store
            .add(
                &self.layout.notifications(),
                DeliveryIntentRecord::write_fields(intent),
            )
            .await?;
        Ok(DeliveryIntentId::from(id.into_inner()))
    }

    async fn retire(&self, id: &DeliveryIntentId) -> Result<()> {
        self.store.delete(&self.layout.notification(id)).await?;
        Ok(())
    }

    async fn pending_for(&self, recipient: &UserId) -> Result<Vec<DeliveryIntent>> {
        let snapshot = self.store.query(&self.pending_query(recipient)).await?;
        Ok(decode_intents(&snapshot.documents))
    }

    fn subscribe_pending(&self, recipient: &UserId) -> Result<Feed<Vec<DeliveryIntent>>> {
        let (snapshots, registration) = self
            .store
            .subscribe(self.pending_query(recipient))?
            .into_parts();
        let registration = Arc::new(registration);

        let intents = snapshots.map(|snapshot| -> Result<Vec<DeliveryIntent>> {
            Ok(decode_intents(&snapshot?.documents))
        });

        Ok(Feed::new(intents, move || registration.remove()))
    }
}

/// Malformed intents are skipped so that they don't block the rest of the queue.
fn decode_intents(documents: &[Document]) -> Vec<DeliveryIntent> {
    documents
        .iter()
        .filter_map(|document| match DeliveryIntentRecord::decode(document) {
            Ok(intent) => Some(intent),
            Err(err) => {
                warn!("Skipping malformed delivery intent {}. {err}", document.path);
                None
            }
        })
        .collect()
}
