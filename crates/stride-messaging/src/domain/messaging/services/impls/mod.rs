// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_relay_service::{MessageRelayService, MessageRelayServiceDependencies};

mod message_relay_service;
