// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cell::Cell;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use futures::StreamExt;
use parking_lot::{Mutex, ReentrantMutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::app::deps::{DynIDProvider, DynReadStateTracker, DynTimeProvider};
use crate::domain::general::services::{IDProvider, TimeProvider};
use crate::domain::messaging::models::{
    ClientNonce, LocalEcho, MessageChange, MessageList, MessageListItem, SendMessageError,
};
use crate::domain::shared::models::{ConversationId, Feed, FeedCanceller, UserId};

type UpdateHandler = Arc<dyn Fn(Vec<MessageListItem>) + Send + Sync>;

pub(crate) struct SubscriptionContext {
    pub user_id: UserId,
    pub conversation_id: ConversationId,
    pub id_provider: DynIDProvider,
    pub time_provider: DynTimeProvider,
    /// Set if new messages should mark the conversation as read.
    pub read_state_tracker: Option<DynReadStateTracker>,
}

/// A live, reconciled view of one conversation's messages.
///
/// The subscription ends when `unsubscribe` is called or the value is dropped. No update is
/// delivered after `unsubscribe` returned.
pub struct MessageSubscription {
    inner: Arc<SubscriptionInner>,
    canceller: FeedCanceller,
    task: JoinHandle<()>,
}

struct SubscriptionInner {
    ctx: SubscriptionContext,
    list: Mutex<MessageList>,
    on_update: UpdateHandler,
    /// Reentrant, so that `on_update` may unsubscribe.
    active: ReentrantMutex<Cell<bool>>,
}

impl MessageSubscription {
    pub(crate) fn start(
        feed: Feed<Vec<MessageChange>>,
        ctx: SubscriptionContext,
        on_update: UpdateHandler,
    ) -> Self {
        let inner = Arc::new(SubscriptionInner {
            ctx,
            list: Default::default(),
            on_update,
            active: ReentrantMutex::new(Cell::new(true)),
        });
        let canceller = feed.canceller();
        let task = tokio::spawn(Self::run(inner.clone(), feed));

        Self {
            inner,
            canceller,
            task,
        }
    }

    pub fn conversation_id(&self) -> &ConversationId {
        &self.inner.ctx.conversation_id
    }

    /// The current list, oldest message first.
    pub fn items(&self) -> Vec<MessageListItem> {
        self.inner.list.lock().items().to_vec()
    }

    /// Shows `text` as a pending message until its confirmed copy arrives. Pass the returned
    /// nonce along with the send request so that both can be matched reliably.
    pub fn insert_local_echo(
        &self,
        sender_id: &UserId,
        text: &str,
    ) -> Result<ClientNonce, SendMessageError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SendMessageError::EmptyMessage);
        }

        let nonce = ClientNonce::local(self.inner.ctx.id_provider.new_id());
        let items = {
            let mut list = self.inner.list.lock();
            list.insert_local_echo(LocalEcho {
                nonce: nonce.clone(),
                text: text.to_string(),
                sender_id: sender_id.clone(),
                created_at: self.inner.ctx.time_provider.now(),
            });
            list.items().to_vec()
        };
        self.inner.notify(items);

        Ok(nonce)
    }

    /// Removes a local echo, e.g. after its message failed to send.
    pub fn discard_local_echo(&self, nonce: &ClientNonce) -> bool {
        let items = {
            let mut list = self.inner.list.lock();
            if !list.discard_local_echo(nonce) {
                return false;
            }
            list.items().to_vec()
        };
        self.inner.notify(items);
        true
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    /// Stops the subscription and releases the store listener. Calling this more than once has
    /// no effect.
    pub fn unsubscribe(&self) {
        {
            let active = self.inner.active.lock();
            if !active.replace(false) {
                return;
            }
        }

        self.canceller.cancel();
        self.task.abort();
        debug!(
            "Unsubscribed from messages of {}.",
            self.inner.ctx.conversation_id
        );
    }
}

impl MessageSubscription {
    async fn run(inner: Arc<SubscriptionInner>, mut feed: Feed<Vec<MessageChange>>) {
        while let Some(result) = feed.next().await {
            if !inner.is_active() {
                break;
            }

            let changes = match result {
                Ok(changes) => changes,
                Err(err) => {
                    warn!(
                        "Message subscription of {} failed. {err}",
                        inner.ctx.conversation_id
                    );
                    continue;
                }
            };

            let (reconciliation, items) = {
                let mut list = inner.list.lock();
                let reconciliation = list.apply(changes);
                (reconciliation, list.items().to_vec())
            };

            if reconciliation.changed {
                inner.notify(items);
            }

            if reconciliation.added > 0 {
                inner.mark_read();
            }
        }
    }
}

impl SubscriptionInner {
    fn is_active(&self) -> bool {
        self.active.lock().get()
    }

    fn notify(&self, items: Vec<MessageListItem>) {
        let active = self.active.lock();
        if active.get() {
            (self.on_update)(items);
        }
    }

    fn mark_read(&self) {
        let Some(tracker) = self.ctx.read_state_tracker.clone() else {
            return;
        };
        let conversation_id = self.ctx.conversation_id.clone();
        let user_id = self.ctx.user_id.clone();

        tokio::spawn(async move {
            if let Err(err) = tracker.mark_read(&conversation_id, &user_id).await {
                warn!("Failed to mark {conversation_id} as read. {err}");
            }
        });
    }
}

impl Drop for MessageSubscription {
    fn drop(&mut self) {
        self.unsubscribe()
    }
}

impl Debug for MessageSubscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageSubscription")
            .field("conversation_id", &self.inner.ctx.conversation_id)
            .field("is_active", &self.is_active())
            .finish()
    }
}
