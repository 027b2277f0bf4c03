// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;
use std::time::Duration;

use anyhow::Result;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynDeliveryIntentsRepository,
    DynNotificationProcessor,
};
use crate::domain::notifications::models::{DeliveryIntent, DeliveryIntentId, ProcessingOutcome};
use crate::domain::shared::models::{Feed, FeedCanceller, UserId};
use crate::ClientEvent;

#[derive(Clone)]
pub struct NotificationSessionDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub delivery_intents_repo: DynDeliveryIntentsRepository,
    pub notification_processor: DynNotificationProcessor,
}

/// Applies the delivery intents addressed to one user for as long as the user is logged in.
///
/// Intents are processed one at a time in the order they were sent. An intent that fails to
/// apply stays queued and is retried with the next snapshot or retry tick.
pub struct NotificationSession {
    user_id: UserId,
    canceller: FeedCanceller,
    task: JoinHandle<()>,
}

impl NotificationSession {
    /// Subscribes to the intents queued for `user_id`. Must be called within a Tokio runtime.
    pub fn start(user_id: UserId, deps: NotificationSessionDependencies) -> Result<Self> {
        let feed = deps.delivery_intents_repo.subscribe_pending(&user_id)?;
        let canceller = feed.canceller();
        let retry_interval = deps.ctx.config.intent_retry_interval;

        let worker = SessionWorker {
            user_id: user_id.clone(),
            deps,
            retired: HashSet::new(),
        };
        let task = tokio::spawn(worker.run(feed, retry_interval));

        info!("Started notification session for {user_id}.");
        Ok(Self {
            user_id,
            canceller,
            task,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    fn stop(&self) {
        self.canceller.cancel();
        self.task.abort();
    }
}

impl Drop for NotificationSession {
    fn drop(&mut self) {
        self.stop();
        info!("Ended notification session for {}.", self.user_id);
    }
}

struct SessionWorker {
    user_id: UserId,
    deps: NotificationSessionDependencies,
    /// Intents retired by this session that may still show up in buffered snapshots.
    retired: HashSet<DeliveryIntentId>,
}

impl SessionWorker {
    async fn run(mut self, mut feed: Feed<Vec<DeliveryIntent>>, retry_interval: Option<Duration>) {
        let mut retry_ticker = retry_interval.map(|period| {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            ticker
        });

        loop {
            let intents = tokio::select! {
                item = feed.next() => match item {
                    Some(Ok(intents)) => intents,
                    Some(Err(err)) => {
                        warn!("Delivery intent snapshot failed for {}. {err}", self.user_id);
                        continue;
                    }
                    None => break,
                },
                _ = tick(&mut retry_ticker) => {
                    match self.deps.delivery_intents_repo.pending_for(&self.user_id).await {
                        Ok(intents) => intents,
                        Err(err) => {
                            warn!("Failed to load pending intents for {}. {err}", self.user_id);
                            continue;
                        }
                    }
                }
            };

            self.process_all(intents).await;
        }

        debug!("Delivery intent feed of {} ended.", self.user_id);
    }

    async fn process_all(&mut self, intents: Vec<DeliveryIntent>) {
        // Anything missing from a full listing is gone from the store for good.
        self.retired
            .retain(|id| intents.iter().any(|intent| &intent.id == id));

        for intent in intents {
            if self.retired.contains(&intent.id) {
                continue;
            }

            match self.deps.notification_processor.process(&intent).await {
                Ok(outcome) => {
                    self.retired.insert(intent.id.clone());
                    if outcome == ProcessingOutcome::Applied {
                        self.deps
                            .client_event_dispatcher
                            .dispatch_event(ClientEvent::ConversationChanged {
                                conversation_id: intent.conversation_id,
                            });
                    }
                }
                Err(err) => warn!(
                    "Failed to process delivery intent {} for {}. {err}",
                    intent.id, self.user_id
                ),
            }
        }
    }
}

async fn tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => futures::future::pending::<()>().await,
    }
}
