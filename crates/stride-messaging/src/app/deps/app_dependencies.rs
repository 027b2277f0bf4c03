// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::conversations::repos::ConversationsRepository;
use crate::domain::conversations::services::{ConversationDirectoryService, ReadStateTracker};
use crate::domain::general::services::{IDProvider, TimeProvider};
use crate::domain::messaging::repos::MessagesRepository;
use crate::domain::messaging::services::MessageRelayService;
use crate::domain::notifications::repos::DeliveryIntentsRepository;
use crate::domain::notifications::services::NotificationProcessor;
use crate::domain::user_profiles::repos::UserProfileRepository;

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub(crate) type DynConversationDirectoryService = Arc<dyn ConversationDirectoryService>;
pub(crate) type DynConversationsRepository = Arc<dyn ConversationsRepository>;
pub(crate) type DynDeliveryIntentsRepository = Arc<dyn DeliveryIntentsRepository>;
pub(crate) type DynIDProvider = Arc<dyn IDProvider>;
pub(crate) type DynMessageRelayService = Arc<dyn MessageRelayService>;
pub(crate) type DynMessagesRepository = Arc<dyn MessagesRepository>;
pub(crate) type DynNotificationProcessor = Arc<dyn NotificationProcessor>;
pub(crate) type DynReadStateTracker = Arc<dyn ReadStateTracker>;
pub(crate) type DynTimeProvider = Arc<dyn TimeProvider>;
pub(crate) type DynUserProfileRepository = Arc<dyn UserProfileRepository>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub conversation_directory_service: DynConversationDirectoryService,
    pub conversations_repo: DynConversationsRepository,
    pub ctx: DynAppContext,
    pub delivery_intents_repo: DynDeliveryIntentsRepository,
    pub id_provider: DynIDProvider,
    pub message_relay_service: DynMessageRelayService,
    pub messages_repo: DynMessagesRepository,
    pub notification_processor: DynNotificationProcessor,
    pub read_state_tracker: DynReadStateTracker,
    pub time_provider: DynTimeProvider,
    pub user_profile_repo: DynUserProfileRepository,
}
