// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use nanoid::nanoid;

use crate::domain::general::services::IDProvider;

/// Generates short random ids for local echoes.
#[derive(Default)]
pub struct NanoIDProvider {}

impl IDProvider for NanoIDProvider {
    fn new_id(&self) -> String {
        let chars = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .collect::<Vec<char>>();
        nanoid!(12, &chars)
    }
}
