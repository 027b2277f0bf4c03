// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::DynAppContext;
use crate::client_builder::{ClientBuilder, UndefinedStore};
use crate::domain::shared::models::UserId;
use crate::services::{ConversationsService, MessagesService, SessionService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedStore> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub conversations: ConversationsService,
    pub messages: MessagesService,
    pub(crate) ctx: DynAppContext,
    pub(crate) session: SessionService,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    /// Starts processing the messages delivered to `user_id`. A running session of another
    /// user is ended first. Must be called within a Tokio runtime.
    pub fn start_session(&self, user_id: &UserId) {
        self.session.start(user_id)
    }

    pub fn end_session(&self) {
        self.session.end()
    }

    pub fn session_user_id(&self) -> Option<UserId> {
        self.ctx.session_user().ok()
    }
}
