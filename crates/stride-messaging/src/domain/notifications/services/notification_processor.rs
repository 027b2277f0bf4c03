// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::notifications::models::{DeliveryIntent, ProcessingOutcome};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait NotificationProcessor: Send + Sync {
    /// Copies the message described by `intent` into the recipient's mailbox and retires the
    /// intent. On error the intent stays queued and can be processed again.
    async fn process(&self, intent: &DeliveryIntent) -> Result<ProcessingOutcome>;
}
