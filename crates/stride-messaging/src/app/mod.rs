// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod deps;
pub mod dtos;
pub mod services;

#[cfg(feature = "test")]
pub mod event_handlers;
#[cfg(not(feature = "test"))]
pub(crate) mod event_handlers;
