// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use id_provider::IDProvider;
pub use time_provider::TimeProvider;

mod id_provider;
mod time_provider;
