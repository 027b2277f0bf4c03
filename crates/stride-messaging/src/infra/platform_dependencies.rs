// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use stride_store::DocumentStore;

use crate::app::deps::{
    AppContext, AppDependencies, DynClientEventDispatcher, DynIDProvider, DynTimeProvider,
};
use crate::domain::conversations::services::impls::{
    ConversationDirectoryService, ConversationDirectoryServiceDependencies, ReadStateTracker,
    ReadStateTrackerDependencies,
};
use crate::domain::messaging::services::impls::{
    MessageRelayService, MessageRelayServiceDependencies,
};
use crate::domain::notifications::services::impls::{
    NotificationProcessor, NotificationProcessorDependencies,
};
use crate::infra::conversations::StoreConversationsRepository;
use crate::infra::general::StoreLayout;
use crate::infra::messaging::StoreMessagesRepository;
use crate::infra::notifications::StoreDeliveryIntentsRepository;
use crate::infra::user_profiles::StoreUserProfileRepository;

pub struct PlatformDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: AppContext,
    pub id_provider: DynIDProvider,
    pub store: Arc<dyn DocumentStore>,
    pub time_provider: DynTimeProvider,
}

impl From<PlatformDependencies> for AppDependencies {
    fn from(d: PlatformDependencies) -> Self {
        let layout = StoreLayout::new(&d.ctx.config);
        let ctx = Arc::new(d.ctx);

        let conversations_repo = Arc::new(StoreConversationsRepository::new(
            d.store.clone(),
            layout.clone(),
        ));
        let delivery_intents_repo = Arc::new(StoreDeliveryIntentsRepository::new(
            d.store.clone(),
            layout.clone(),
        ));
        let messages_repo = Arc::new(StoreMessagesRepository::new(
            d.store.clone(),
            layout.clone(),
        ));
        let user_profile_repo = Arc::new(StoreUserProfileRepository::new(d.store, layout));

        let conversation_directory_service =
            ConversationDirectoryService::from(ConversationDirectoryServiceDependencies {
                conversations_repo: conversations_repo.clone(),
                time_provider: d.time_provider.clone(),
                user_profile_repo: user_profile_repo.clone(),
            });

        let read_state_tracker = ReadStateTracker::from(ReadStateTrackerDependencies {
            conversations_repo: conversations_repo.clone(),
        });

        let message_relay_service = MessageRelayService::from(MessageRelayServiceDependencies {
            ctx: ctx.clone(),
            conversations_repo: conversations_repo.clone(),
            delivery_intents_repo: delivery_intents_repo.clone(),
            messages_repo: messages_repo.clone(),
        });

        let notification_processor =
            NotificationProcessor::from(NotificationProcessorDependencies {
                ctx: ctx.clone(),
                conversations_repo: conversations_repo.clone(),
                delivery_intents_repo: delivery_intents_repo.clone(),
                messages_repo: messages_repo.clone(),
                user_profile_repo: user_profile_repo.clone(),
                updated_conversations: Default::default(),
            });

        AppDependencies {
            client_event_dispatcher: d.client_event_dispatcher,
            conversation_directory_service: Arc::new(conversation_directory_service),
            conversations_repo,
            ctx,
            delivery_intents_repo,
            id_provider: d.id_provider,
            message_relay_service: Arc::new(message_relay_service),
            messages_repo,
            notification_processor: Arc::new(notification_processor),
            read_state_tracker: Arc::new(read_state_tracker),
            time_provider: d.time_provider,
            user_profile_repo,
        }
    }
}
