// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use chrono::{DateTime, Utc};

pub trait TimeProvider: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl TimeProvider for Arc<dyn TimeProvider> {
    fn now(&self) -> DateTime<Utc> {
        self.deref().now()
    }
}
