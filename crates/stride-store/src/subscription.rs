// stride/stride-store
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use parking_lot::Mutex;

use crate::{QuerySnapshot, StoreError};

type Teardown = Box<dyn FnOnce() + Send>;

/// Handle to a registered snapshot listener. The listener is released when `remove` is called
/// or the registration is dropped, whichever happens first.
pub struct ListenerRegistration {
    teardown: Mutex<Option<Teardown>>,
}

impl ListenerRegistration {
    pub fn new(teardown: impl FnOnce() + Send + 'static) -> Self {
        Self {
            teardown: Mutex::new(Some(Box::new(teardown))),
        }
    }

    /// Releases the listener. Subsequent calls do nothing.
    pub fn remove(&self) {
        let teardown = self.teardown.lock().take();
        if let Some(teardown) = teardown {
            teardown()
        }
    }

    pub fn is_removed(&self) -> bool {
        self.teardown.lock().is_none()
    }
}

impl Drop for ListenerRegistration {
    fn drop(&mut self) {
        self.remove()
    }
}

impl Debug for ListenerRegistration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistration")
            .field("is_removed", &self.is_removed())
            .finish()
    }
}

pub type SnapshotStream = Pin<Box<dyn Stream<Item = Result<QuerySnapshot, StoreError>> + Send>>;

/// A stream of snapshots for a standing query.
pub struct QuerySubscription {
    snapshots: SnapshotStream,
    registration: ListenerRegistration,
}

impl QuerySubscription {
    pub fn new(
        snapshots: impl Stream<Item = Result<QuerySnapshot, StoreError>> + Send + 'static,
        registration: ListenerRegistration,
    ) -> Self {
        Self {
            snapshots: Box::pin(snapshots),
            registration,
        }
    }

    pub fn registration(&self) -> &ListenerRegistration {
        &self.registration
    }

    /// Releases the underlying listener. The stream ends once all buffered snapshots have been
    /// consumed.
    pub fn cancel(&self) {
        self.registration.remove()
    }

    /// Splits the subscription so that the stream and the listener can be owned separately.
    pub fn into_parts(self) -> (SnapshotStream, ListenerRegistration) {
        (self.snapshots, self.registration)
    }
}

impl Stream for QuerySubscription {
    type Item = Result<QuerySnapshot, StoreError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.snapshots.as_mut().poll_next(cx)
    }
}

impl Debug for QuerySubscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuerySubscription")
            .field("registration", &self.registration)
            .finish()
    }
}
