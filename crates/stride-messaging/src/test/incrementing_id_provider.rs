// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::Mutex;

use crate::domain::general::services::IDProvider;

pub struct IncrementingIDProvider {
    prefix: String,
    last_id: Mutex<i64>,
}

impl IncrementingIDProvider {
    pub fn new(prefix: &str) -> Self {
        IncrementingIDProvider {
            prefix: prefix.to_string(),
            last_id: Mutex::new(0),
        }
    }

    pub fn reset(&self) {
        *self.last_id.lock() = 0;
    }
}

impl IDProvider for IncrementingIDProvider {
    fn new_id(&self) -> String {
        let mut last_id = self.last_id.lock();
        *last_id += 1;
        format!("{}-{}", self.prefix, *last_id)
    }
}
