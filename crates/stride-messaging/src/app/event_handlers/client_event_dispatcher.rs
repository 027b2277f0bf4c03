// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{OnceLock, Weak};

use tracing::warn;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::client::ClientInner;
use crate::{Client, ClientDelegate, ClientEvent};

/// Forwards events to the delegate on the calling thread.
pub struct ClientEventDispatcher {
    client_inner: OnceLock<Weak<ClientInner>>,
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self {
            client_inner: Default::default(),
            delegate,
        }
    }

    pub(crate) fn set_client_inner(&self, client_inner: Weak<ClientInner>) {
        if self.client_inner.set(client_inner).is_err() {
            warn!("Tried to set client_inner on ClientEventDispatcher more than once.");
        }
    }
}

impl ClientEventDispatcherTrait for ClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        let Some(delegate) = &self.delegate else {
            return;
        };

        // The client is gone or not fully built yet.
        let Some(client_inner) = self.client_inner.get().and_then(Weak::upgrade) else {
            return;
        };

        delegate.handle_event(Client::from(client_inner), event);
    }
}
