// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client_event_dispatcher::ClientEventDispatcher;
pub use notification_session::{NotificationSession, NotificationSessionDependencies};

use crate::ClientEvent;

mod client_event_dispatcher;
mod notification_session;

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
}
