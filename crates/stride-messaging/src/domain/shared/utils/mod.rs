// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub(crate) use display_name_builder::build_display_name;
pub(crate) use message_preview::build_message_preview;

mod display_name_builder;
mod message_preview;
