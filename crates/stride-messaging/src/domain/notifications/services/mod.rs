// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use notification_processor::NotificationProcessor;

pub mod impls;
mod notification_processor;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::notification_processor::MockNotificationProcessor;
}
