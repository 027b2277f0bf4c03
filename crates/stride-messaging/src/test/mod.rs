// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use incrementing_id_provider::IncrementingIDProvider;
pub use mock_app_dependencies::{
    MockAppDependencies, MockConversationDirectoryServiceDependencies,
    MockMessageRelayServiceDependencies, MockNotificationProcessorDependencies,
};

mod incrementing_id_provider;
mod mock_app_dependencies;

pub mod mock_data {
    pub use super::mock_app_dependencies::mock_reference_date as reference_date;
}
