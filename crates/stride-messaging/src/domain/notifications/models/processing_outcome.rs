// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingOutcome {
    /// The message was copied into the recipient's mailbox and the intent retired.
    Applied,
    /// The recipient's copy already existed. The intent was only retired.
    AlreadyApplied,
}
