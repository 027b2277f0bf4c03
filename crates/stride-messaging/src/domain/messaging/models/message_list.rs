// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::domain::messaging::models::{ClientNonce, LocalEcho, Message, MessageChange, MessageId};
use crate::domain::shared::models::UserId;

#[derive(Debug, Clone, PartialEq)]
pub enum MessageListItem {
    Confirmed(Message),
    Pending(LocalEcho),
}

impl MessageListItem {
    pub fn text(&self) -> &str {
        match self {
            Self::Confirmed(message) => &message.text,
            Self::Pending(echo) => &echo.text,
        }
    }

    pub fn sender_id(&self) -> &UserId {
        match self {
            Self::Confirmed(message) => &message.sender_id,
            Self::Pending(echo) => &echo.sender_id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Confirmed(message) => message.created_at,
            Self::Pending(echo) => echo.created_at,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    fn confirmed_id(&self) -> Option<&MessageId> {
        match self {
            Self::Confirmed(message) => Some(&message.id),
            Self::Pending(_) => None,
        }
    }
}

/// What a call to `MessageList::apply` did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub changed: bool,
    /// Number of confirmed messages that weren't in the list before.
    pub added: usize,
}

/// The ordered message list of one conversation as shown to the user, combining confirmed
/// messages from the mailbox with local echoes.
///
/// Confirmed messages are tracked by id, so a message that is delivered again in a later
/// snapshot is not inserted twice. A newly confirmed message takes the place of its local echo,
/// matched by nonce or, for messages without a nonce, by text and sender.
#[derive(Debug, Clone, Default)]
pub struct MessageList {
    items: Vec<MessageListItem>,
    seen: HashSet<MessageId>,
}

impl MessageList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[MessageListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn insert_local_echo(&mut self, echo: LocalEcho) {
        self.items.push(MessageListItem::Pending(echo));
        self.sort_if_needed();
    }

    /// Removes the local echo tagged with `nonce`. Returns false if there was none.
    pub fn discard_local_echo(&mut self, nonce: &ClientNonce) -> bool {
        let len = self.items.len();
        self.items
            .retain(|item| !matches!(item, MessageListItem::Pending(echo) if &echo.nonce == nonce));
        len != self.items.len()
    }

    pub fn apply(&mut self, changes: impl IntoIterator<Item = MessageChange>) -> Reconciliation {
        let mut result = Reconciliation::default();

        for change in changes {
            match change {
                MessageChange::Added(message) | MessageChange::Modified(message) => {
                    if self.seen.contains(&message.id) {
                        result.changed |= self.replace_confirmed(message);
                        continue;
                    }

                    self.seen.insert(message.id.clone());
                    result.changed = true;
                    result.added += 1;

                    match self.matching_echo(&message) {
                        Some(idx) => self.items[idx] = MessageListItem::Confirmed(message),
                        None => self.items.push(MessageListItem::Confirmed(message)),
                    }
                }
                MessageChange::Removed(id) => {
                    if self.seen.remove(&id) {
                        self.items.retain(|item| item.confirmed_id() != Some(&id));
                        result.changed = true;
                    }
                }
            }
        }

        if result.changed {
            self.sort_if_needed();
        }

        result
    }

    fn replace_confirmed(&mut self, message: Message) -> bool {
        let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.confirmed_id() == Some(&message.id))
        else {
            return false;
        };

        if matches!(&*item, MessageListItem::Confirmed(existing) if existing == &message) {
            return false;
        }

        *item = MessageListItem::Confirmed(message);
        true
    }

    fn matching_echo(&self, message: &Message) -> Option<usize> {
        let mut echoes = self
            .items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| match item {
                MessageListItem::Pending(echo) => Some((idx, echo)),
                MessageListItem::Confirmed(_) => None,
            });

        let found = match &message.nonce {
            Some(nonce) => echoes.find(|(_, echo)| &echo.nonce == nonce),
            None => echoes
                .find(|(_, echo)| echo.text == message.text && echo.sender_id == message.sender_id),
        };

        found.map(|(idx, _)| idx)
    }

    fn sort_if_needed(&mut self) {
        let is_sorted = self
            .items
            .windows(2)
            .all(|pair| pair[0].created_at() <= pair[1].created_at());

        if !is_sorted {
            // Stable, so items sharing a timestamp keep their arrival order.
            self.items.sort_by_key(MessageListItem::created_at);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap() + Duration::seconds(secs)
    }

    fn message(id: &str, text: &str, sender: &str, secs: i64) -> Message {
        Message {
            id: id.into(),
            text: text.to_string(),
            sender_id: sender.into(),
            created_at: date(secs),
            nonce: None,
        }
    }

    fn echo(nonce: &str, text: &str, sender: &str, secs: i64) -> LocalEcho {
        LocalEcho {
            nonce: ClientNonce::local(nonce),
            text: text.to_string(),
            sender_id: sender.into(),
            created_at: date(secs),
        }
    }

    fn texts(list: &MessageList) -> Vec<&str> {
        list.items().iter().map(MessageListItem::text).collect()
    }

    #[test]
    fn test_redelivered_messages_are_ignored() {
        let mut list = MessageList::new();

        let result = list.apply(vec![MessageChange::Added(message("1", "hi", "a", 1))]);
        assert_eq!(result, Reconciliation { changed: true, added: 1 });

        let result = list.apply(vec![MessageChange::Added(message("1", "hi", "a", 1))]);
        assert_eq!(result, Reconciliation::default());
        assert_eq!(texts(&list), vec!["hi"]);
    }

    #[test]
    fn test_confirmed_message_replaces_echo_in_place() {
        let mut list = MessageList::new();
        list.apply(vec![MessageChange::Added(message("1", "first", "b", 1))]);
        list.insert_local_echo(echo("x", "hi", "a", 5));
        list.insert_local_echo(echo("y", "later", "a", 6));

        let result = list.apply(vec![MessageChange::Added(message("2", "hi", "a", 3))]);

        assert_eq!(result, Reconciliation { changed: true, added: 1 });
        assert_eq!(texts(&list), vec!["first", "hi", "later"]);
        assert!(!list.items()[1].is_pending());
        assert!(list.items()[2].is_pending());
    }

    #[test]
    fn test_matches_echo_by_nonce_before_content() {
        let mut list = MessageList::new();
        list.insert_local_echo(echo("x", "hi", "a", 1));
        list.insert_local_echo(echo("y", "hi", "a", 2));

        let mut confirmed = message("1", "hi", "a", 3);
        confirmed.nonce = Some(ClientNonce::local("y"));
        list.apply(vec![MessageChange::Added(confirmed)]);

        let pending = list
            .items()
            .iter()
            .filter_map(|item| match item {
                MessageListItem::Pending(echo) => Some(echo.nonce.clone()),
                MessageListItem::Confirmed(_) => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(pending, vec![ClientNonce::local("x")]);
    }

    #[test]
    fn test_message_with_unknown_nonce_is_appended() {
        let mut list = MessageList::new();
        list.insert_local_echo(echo("x", "hi", "a", 1));

        let mut confirmed = message("1", "hi", "a", 2);
        confirmed.nonce = Some(ClientNonce::local("other-device"));
        list.apply(vec![MessageChange::Added(confirmed)]);

        assert_eq!(list.len(), 2);
        assert!(list.items()[0].is_pending());
    }

    #[test]
    fn test_sorts_out_of_order_batches() {
        let mut list = MessageList::new();
        list.apply(vec![
            MessageChange::Added(message("2", "m2", "a", 2)),
            MessageChange::Added(message("1", "m1", "a", 1)),
        ]);
        list.apply(vec![MessageChange::Added(message("0", "m0", "a", 0))]);

        assert_eq!(texts(&list), vec!["m0", "m1", "m2"]);
    }

    #[test]
    fn test_modified_and_removed_messages() {
        let mut list = MessageList::new();
        list.apply(vec![
            MessageChange::Added(message("1", "m1", "a", 1)),
            MessageChange::Added(message("2", "m2", "a", 2)),
        ]);

        let result = list.apply(vec![MessageChange::Modified(message("1", "m1", "a", 3))]);
        assert_eq!(result, Reconciliation { changed: true, added: 0 });
        assert_eq!(texts(&list), vec!["m2", "m1"]);

        let result = list.apply(vec![MessageChange::Removed("2".into())]);
        assert_eq!(result, Reconciliation { changed: true, added: 0 });
        assert_eq!(texts(&list), vec!["m1"]);

        let result = list.apply(vec![MessageChange::Removed("2".into())]);
        assert!(!result.changed);
    }

    #[test]
    fn test_discard_local_echo() {
        let mut list = MessageList::new();
        list.insert_local_echo(echo("x", "hi", "a", 1));

        assert!(list.discard_local_echo(&ClientNonce::local("x")));
        assert!(!list.discard_local_echo(&ClientNonce::local("x")));
        assert!(list.is_empty());
    }
}
