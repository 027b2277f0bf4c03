// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use parking_lot::RwLock;

use crate::domain::shared::models::UserId;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Collection holding user profiles and, nested below them, each user's mailbox.
    pub users_collection: String,
    /// Name of the conversations collection inside a user document.
    pub conversations_collection: String,
    /// Name of the messages collection inside a conversation document.
    pub messages_collection: String,
    /// Top-level collection of queued delivery intents.
    pub notifications_collection: String,
    /// Store the recipient's copy of a message under the id of its delivery intent, so that
    /// processing an intent twice doesn't duplicate the message.
    pub deduplicate_intents: bool,
    /// How often intents that failed to apply are retried if no new snapshot arrives in
    /// between. `None` retries on new snapshots only.
    pub intent_retry_interval: Option<Duration>,
    /// Whether an open message subscription marks its conversation as read when new messages
    /// arrive.
    pub mark_read_on_receive: bool,
    /// Maximum length in characters of the last message preview stored with a conversation.
    pub message_preview_max_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_collection: "users".to_string(),
            conversations_collection: "conversations".to_string(),
            messages_collection: "messages".to_string(),
            notifications_collection: "notifications".to_string(),
            deduplicate_intents: true,
            intent_retry_interval: Some(Duration::from_secs(30)),
            mark_read_on_receive: true,
            message_preview_max_chars: 120,
        }
    }
}

pub struct AppContext {
    pub config: AppConfig,
    session_user: RwLock<Option<UserId>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            session_user: Default::default(),
        }
    }
}

impl AppContext {
    /// The user of the running notification session.
    pub fn session_user(&self) -> Result<UserId> {
        self.session_user
            .read()
            .clone()
            .ok_or(anyhow::anyhow!("No session is running."))
    }

    pub(crate) fn set_session_user(&self, user_id: UserId) {
        self.session_user.write().replace(user_id);
    }

    pub(crate) fn reset_session_user(&self) {
        self.session_user.write().take();
    }
}

