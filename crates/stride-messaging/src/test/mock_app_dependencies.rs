// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use derivative::Derivative;

use crate::app::deps::{AppConfig, AppContext, AppDependencies, DynIDProvider, DynTimeProvider};
use crate::app::event_handlers::MockClientEventDispatcherTrait;
use crate::domain::conversations::repos::mocks::MockConversationsRepository;
use crate::domain::conversations::services::impls::ConversationDirectoryServiceDependencies;
use crate::domain::conversations::services::mocks::{
    MockConversationDirectoryService, MockReadStateTracker,
};
use crate::domain::messaging::repos::mocks::MockMessagesRepository;
use crate::domain::messaging::services::impls::MessageRelayServiceDependencies;
use crate::domain::messaging::services::mocks::MockMessageRelayService;
use crate::domain::notifications::repos::mocks::MockDeliveryIntentsRepository;
use crate::domain::notifications::services::impls::NotificationProcessorDependencies;
use crate::domain::notifications::services::mocks::MockNotificationProcessor;
use crate::domain::user_profiles::repos::mocks::MockUserProfileRepository;
use crate::test::{ConstantTimeProvider, IncrementingIDProvider};

pub fn mock_reference_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 7, 30, 0).unwrap()
}

impl Default for AppContext {
    fn default() -> Self {
        AppContext::new(AppConfig::default())
    }
}

#[derive(Derivative)]
#[derivative(Default)]
pub struct MockAppDependencies {
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    pub conversation_directory_service: MockConversationDirectoryService,
    pub conversations_repo: MockConversationsRepository,
    pub ctx: AppContext,
    pub delivery_intents_repo: MockDeliveryIntentsRepository,
    #[derivative(Default(value = "Arc::new(IncrementingIDProvider::new(\"id\"))"))]
    pub id_provider: DynIDProvider,
    pub message_relay_service: MockMessageRelayService,
    pub messages_repo: MockMessagesRepository,
    pub notification_processor: MockNotificationProcessor,
    pub read_state_tracker: MockReadStateTracker,
    #[derivative(Default(value = "Arc::new(ConstantTimeProvider::new(mock_reference_date()))"))]
    pub time_provider: DynTimeProvider,
    pub user_profile_repo: MockUserProfileRepository,
}

impl MockAppDependencies {
    pub fn into_deps(self) -> AppDependencies {
        AppDependencies::from(self)
    }
}

impl From<MockAppDependencies> for AppDependencies {
    fn from(mock: MockAppDependencies) -> Self {
        AppDependencies {
            client_event_dispatcher: Arc::new(mock.client_event_dispatcher),
            conversation_directory_service: Arc::new(mock.conversation_directory_service),
            conversations_repo: Arc::new(mock.conversations_repo),
            ctx: Arc::new(mock.ctx),
            delivery_intents_repo: Arc::new(mock.delivery_intents_repo),
            id_provider: mock.id_provider,
            message_relay_service: Arc::new(mock.message_relay_service),
            messages_repo: Arc::new(mock.messages_repo),
            notification_processor: Arc::new(mock.notification_processor),
            read_state_tracker: Arc::new(mock.read_state_tracker),
            time_provider: mock.time_provider,
            user_profile_repo: Arc::new(mock.user_profile_repo),
        }
    }
}

#[derive(Derivative)]
#[derivative(Default)]
pub struct MockConversationDirectoryServiceDependencies {
    pub conversations_repo: MockConversationsRepository,
    #[derivative(Default(value = "Arc::new(ConstantTimeProvider::new(mock_reference_date()))"))]
    pub time_provider: DynTimeProvider,
    pub user_profile_repo: MockUserProfileRepository,
}

impl MockConversationDirectoryServiceDependencies {
    pub fn into_deps(self) -> ConversationDirectoryServiceDependencies {
        ConversationDirectoryServiceDependencies::from(self)
    }
}

impl From<MockConversationDirectoryServiceDependencies>
    for ConversationDirectoryServiceDependencies
{
    fn from(value: MockConversationDirectoryServiceDependencies) -> Self {
        Self {
            conversations_repo: Arc::new(value.conversations_repo),
            time_provider: value.time_provider,
            user_profile_repo: Arc::new(value.user_profile_repo),
        }
    }
}

#[derive(Default)]
pub struct MockMessageRelayServiceDependencies {
    pub ctx: AppContext,
    pub conversations_repo: MockConversationsRepository,
    pub delivery_intents_repo: MockDeliveryIntentsRepository,
    pub messages_repo: MockMessagesRepository,
}

impl MockMessageRelayServiceDependencies {
    pub fn into_deps(self) -> MessageRelayServiceDependencies {
        MessageRelayServiceDependencies::from(self)
    }
}

impl From<MockMessageRelayServiceDependencies> for MessageRelayServiceDependencies {
    fn from(value: MockMessageRelayServiceDependencies) -> Self {
        Self {
            ctx: Arc::new(value.ctx),
            conversations_repo: Arc::new(value.conversations_repo),
            delivery_intents_repo: Arc::new(value.delivery_intents_repo),
            messages_repo: Arc::new(value.messages_repo),
        }
    }
}

#[derive(Default)]
pub struct MockNotificationProcessorDependencies {
    pub ctx: AppContext,
    pub conversations_repo: MockConversationsRepository,
    pub delivery_intents_repo: MockDeliveryIntentsRepository,
    pub messages_repo: MockMessagesRepository,
    pub user_profile_repo: MockUserProfileRepository,
}

impl MockNotificationProcessorDependencies {
    pub fn into_deps(self) -> NotificationProcessorDependencies {
        NotificationProcessorDependencies::from(self)
    }
}

impl From<MockNotificationProcessorDependencies> for NotificationProcessorDependencies {
    fn from(value: MockNotificationProcessorDependencies) -> Self {
        Self {
            ctx: Arc::new(value.ctx),
            conversations_repo: Arc::new(value.conversations_repo),
            delivery_intents_repo: Arc::new(value.delivery_intents_repo),
            messages_repo: Arc::new(value.messages_repo),
            user_profile_repo: Arc::new(value.user_profile_repo),
            updated_conversations: Default::default(),
        }
    }
}
