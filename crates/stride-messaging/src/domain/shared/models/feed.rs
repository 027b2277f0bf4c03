// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use anyhow::Result;
use futures::stream::BoxStream;
use futures::Stream;

/// A live stream of values backed by a standing store subscription.
///
/// Dropping the feed or calling `cancel` on any of its cancellers releases the underlying
/// listener, after which the stream ends.
pub struct Feed<T> {
    items: BoxStream<'static, Result<T>>,
    canceller: FeedCanceller,
}

#[derive(Clone)]
pub struct FeedCanceller(Arc<dyn Fn() + Send + Sync>);

impl<T: Send + 'static> Feed<T> {
    pub fn new(
        items: impl Stream<Item = Result<T>> + Send + 'static,
        cancel: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            items: Box::pin(items),
            canceller: FeedCanceller(Arc::new(cancel)),
        }
    }

    pub fn canceller(&self) -> FeedCanceller {
        self.canceller.clone()
    }
}

impl FeedCanceller {
    pub fn cancel(&self) {
        (self.0)()
    }
}

impl<T> Stream for Feed<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.items.as_mut().poll_next(cx)
    }
}

impl<T> Drop for Feed<T> {
    fn drop(&mut self) {
        self.canceller.cancel()
    }
}

impl<T> Debug for Feed<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Feed")
    }
}

impl Debug for FeedCanceller {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("FeedCanceller")
    }
}
