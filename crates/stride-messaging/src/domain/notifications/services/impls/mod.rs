// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use notification_processor::{NotificationProcessor, NotificationProcessorDependencies};

mod notification_processor;
