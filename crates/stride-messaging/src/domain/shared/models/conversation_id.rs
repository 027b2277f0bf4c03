// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use stride_utils::id_string;

use super::UserId;

id_string!(
    /// Identifies a direct conversation between exactly two users.
    ConversationId
);

const SEPARATOR: &str = "__";

impl ConversationId {
    /// Derives the conversation id from its two participants. Both participants compute the
    /// same id independently, regardless of argument order.
    pub fn between(lhs: &UserId, rhs: &UserId) -> Self {
        let (first, second) = if lhs <= rhs { (lhs, rhs) } else { (rhs, lhs) };
        Self::from(format!("{first}{SEPARATOR}{second}"))
    }
}
