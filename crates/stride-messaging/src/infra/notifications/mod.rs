// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use delivery_intent_record::DeliveryIntentRecord;
pub use store_delivery_intents_repository::StoreDeliveryIntentsRepository;

mod delivery_intent_record;
mod store_delivery_intents_repository;
