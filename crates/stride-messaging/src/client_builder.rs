// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use stride_store::DocumentStore;

use crate::app::deps::{AppConfig, AppContext, AppDependencies, DynIDProvider, DynTimeProvider};
use crate::app::event_handlers::ClientEventDispatcher;
use crate::client::ClientInner;
use crate::domain::general::services::{IDProvider, TimeProvider};
use crate::infra::general::{NanoIDProvider, SystemTimeProvider};
use crate::infra::platform_dependencies::PlatformDependencies;
use crate::services::{ConversationsService, MessagesService, SessionService};
use crate::{Client, ClientDelegate};

pub struct UndefinedStore;

pub struct ClientBuilder<S> {
    app_config: AppConfig,
    delegate: Option<Box<dyn ClientDelegate>>,
    id_provider: DynIDProvider,
    store: S,
    time_provider: DynTimeProvider,
}

impl ClientBuilder<UndefinedStore> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            delegate: None,
            id_provider: Arc::new(NanoIDProvider::default()),
            store: UndefinedStore,
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }

    /// The document store to read and write through, usually authenticated as the user whose
    /// session will be started.
    pub fn set_store<S: DocumentStore + 'static>(
        self,
        store: S,
    ) -> ClientBuilder<Arc<dyn DocumentStore>> {
        ClientBuilder {
            app_config: self.app_config,
            delegate: self.delegate,
            id_provider: self.id_provider,
            store: Arc::new(store),
            time_provider: self.time_provider,
        }
    }
}

impl<S> ClientBuilder<S> {
    /// Provides the ids of local echoes.
    pub fn set_id_provider<P: IDProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl ClientBuilder<Arc<dyn DocumentStore>> {
    pub fn build(self) -> Client {
        let event_dispatcher = Arc::new(ClientEventDispatcher::new(self.delegate));

        let dependencies: AppDependencies = PlatformDependencies {
            client_event_dispatcher: event_dispatcher.clone(),
            ctx: AppContext::new(self.app_config),
            id_provider: self.id_provider,
            store: self.store,
            time_provider: self.time_provider,
        }
        .into();

        let client_inner = Arc::new(ClientInner {
            conversations: ConversationsService::from(&dependencies),
            messages: MessagesService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
            session: SessionService::from(&dependencies),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Client::from(client_inner)
    }
}
