// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use delivery_intents_repository::DeliveryIntentsRepository;

mod delivery_intents_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::delivery_intents_repository::MockDeliveryIntentsRepository;
}
