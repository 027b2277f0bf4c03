// stride/stride-messaging-integration-tests
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use test_client::{texts, TestClient, UpdateReceiver};
pub use test_env::TestEnv;

mod test_client;
mod test_env;
