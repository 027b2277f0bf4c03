// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use nano_id_provider::NanoIDProvider;
pub use store_layout::StoreLayout;
pub use system_time_provider::SystemTimeProvider;

mod nano_id_provider;
mod store_layout;
mod system_time_provider;
