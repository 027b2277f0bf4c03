// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use store_user_profile_repository::StoreUserProfileRepository;
pub use user_profile_record::UserProfileRecord;

mod store_user_profile_repository;
mod user_profile_record;
