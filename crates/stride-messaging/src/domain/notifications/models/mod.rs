// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use delivery_intent::{DeliveryIntent, DeliveryIntentId, DeliveryIntentState, NewDeliveryIntent};
pub use processing_outcome::ProcessingOutcome;

mod delivery_intent;
mod processing_outcome;
