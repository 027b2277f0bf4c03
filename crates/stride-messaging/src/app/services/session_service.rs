// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::Mutex;
use tracing::error;

use stride_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynDeliveryIntentsRepository,
    DynNotificationProcessor,
};
use crate::app::event_handlers::{NotificationSession, NotificationSessionDependencies};
use crate::domain::shared::models::UserId;
use crate::{ClientEvent, SessionState};

/// Owns the notification session of the logged-in user.
#[derive(InjectDependencies)]
pub struct SessionService {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    delivery_intents_repo: DynDeliveryIntentsRepository,
    #[inject]
    notification_processor: DynNotificationProcessor,
    session: Mutex<Option<NotificationSession>>,
}

impl SessionService {
    pub fn start(&self, user_id: &UserId) {
        let mut events = vec![];

        {
            let mut session = self.session.lock();

            if let Some(current) = session.as_ref() {
                if current.user_id() == user_id && current.is_running() {
                    return;
                }
            }

            if let Some(previous) = session.take() {
                events.push(self.end_session(previous));
            }

            match NotificationSession::start(user_id.clone(), self.session_dependencies()) {
                Ok(started) => {
                    session.replace(started);
                    self.ctx.set_session_user(user_id.clone());
                    events.push(SessionState::Started {
                        user_id: user_id.clone(),
                    });
                }
                // Messages stay queued until the next session picks them up.
                Err(err) => error!("Failed to start notification session for {user_id}. {err}"),
            }
        }

        self.dispatch(events);
    }

    pub fn end(&self) {
        let Some(previous) = self.session.lock().take() else {
            return;
        };
        let state = self.end_session(previous);
        self.dispatch(vec![state]);
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.session
            .lock()
            .as_ref()
            .map(|session| session.user_id().clone())
    }
}

impl SessionService {
    fn end_session(&self, session: NotificationSession) -> SessionState {
        let user_id = session.user_id().clone();
        drop(session);
        self.ctx.reset_session_user();
        SessionState::Ended { user_id }
    }

    fn session_dependencies(&self) -> NotificationSessionDependencies {
        NotificationSessionDependencies {
            client_event_dispatcher: self.client_event_dispatcher.clone(),
            ctx: self.ctx.clone(),
            delivery_intents_repo: self.delivery_intents_repo.clone(),
            notification_processor: self.notification_processor.clone(),
        }
    }

    fn dispatch(&self, states: Vec<SessionState>) {
        for state in states {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::SessionStateChanged { state });
        }
    }
}
