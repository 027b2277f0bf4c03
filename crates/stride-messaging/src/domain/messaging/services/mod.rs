// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use message_relay_service::MessageRelayService;

pub mod impls;
mod message_relay_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::message_relay_service::MockMessageRelayService;
}
