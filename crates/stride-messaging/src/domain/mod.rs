// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod conversations;
pub mod general;
pub mod messaging;
pub mod notifications;
pub mod shared;
pub mod user_profiles;
