// stride/stride-messaging-integration-tests
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod conversations;
mod delivery;
mod helpers;
mod live_messages;
