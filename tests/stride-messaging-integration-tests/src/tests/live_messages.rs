// stride/stride-messaging-integration-tests
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use stride_messaging::dtos::{MessageListItem, UserId};
use stride_store::prelude::*;

use super::helpers::{texts, TestEnv};

fn has_pending(items: &[MessageListItem]) -> bool {
    items.iter().any(MessageListItem::is_pending)
}

#[tokio::test]
async fn test_sent_message_shows_up_exactly_once() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let conversation_id = jane.resolve("joe").await?;

    let (subscription, mut updates) = jane.subscribe(&conversation_id)?;

    let nonce = subscription.insert_local_echo(&"jane".into(), "hi")?;
    let items = updates.wait_for(has_pending).await?;
    assert_eq!(texts(&items), vec!["hi"]);

    jane.send(&conversation_id, "joe", "hi", Some(nonce)).await?;
    let items = updates.wait_for(|items| !has_pending(items)).await?;
    assert_eq!(texts(&items), vec!["hi"]);

    subscription.unsubscribe();

    let (_subscription, mut updates) = jane.subscribe(&conversation_id)?;
    let items = updates.wait_for(|items| !items.is_empty()).await?;
    assert_eq!(texts(&items), vec!["hi"]);

    Ok(())
}

#[tokio::test]
async fn test_identical_texts_reconcile_with_their_own_echo() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let conversation_id = jane.resolve("joe").await?;

    let (subscription, mut updates) = jane.subscribe(&conversation_id)?;

    let first = subscription.insert_local_echo(&"jane".into(), "ok")?;
    let second = subscription.insert_local_echo(&"jane".into(), "ok")?;

    jane.send(&conversation_id, "joe", "ok", Some(second)).await?;
    let items = updates
        .wait_for(|items| items.iter().filter(|item| item.is_pending()).count() == 1)
        .await?;
    assert_eq!(items.len(), 2);

    jane.send(&conversation_id, "joe", "ok", Some(first)).await?;
    let items = updates.wait_for(|items| !has_pending(items)).await?;
    assert_eq!(texts(&items), vec!["ok", "ok"]);

    Ok(())
}

#[tokio::test]
async fn test_rapid_sends_keep_their_order_for_recipient() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let mut joe = env.client("joe");

    let conversation_id = jane.resolve("joe").await?;
    jane.send(&conversation_id, "joe", "m1", None).await?;
    jane.send(&conversation_id, "joe", "m2", None).await?;

    joe.start_session(&"joe".into());
    joe.wait_for_conversation_change().await?;
    joe.wait_for_conversation_change().await?;

    let (_subscription, mut updates) = joe.subscribe(&conversation_id)?;
    let items = updates.wait_for(|items| items.len() == 2).await?;
    assert_eq!(texts(&items), vec!["m1", "m2"]);

    Ok(())
}

#[tokio::test]
async fn test_malformed_message_does_not_hide_the_rest_of_the_mailbox() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let conversation_id = jane.resolve("joe").await?;

    jane.send(&conversation_id, "joe", "hi", None).await?;
    env.store.seed(
        &DocumentPath::parse(&format!(
            "users/jane/conversations/{conversation_id}/messages/legacy"
        ))?,
        json!({ "text": "old", "senderId": "jane", "createdAt": "2024-01-01T00:00:00Z" }),
    )?;

    let messages = jane
        .messages
        .load_messages(&"jane".into(), &conversation_id)
        .await?;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "hi");

    let (_subscription, mut updates) = jane.subscribe(&conversation_id)?;
    let items = updates.wait_for(|items| !items.is_empty()).await?;
    assert_eq!(texts(&items), vec!["hi"]);

    jane.send(&conversation_id, "joe", "second", None).await?;
    let items = updates.wait_for(|items| items.len() == 2).await?;
    assert_eq!(texts(&items), vec!["hi", "second"]);

    Ok(())
}

#[tokio::test]
async fn test_unsubscribing_twice_stops_updates() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let conversation_id = jane.resolve("joe").await?;

    let listeners = env.store.listener_count();
    let (subscription, mut updates) = jane.subscribe(&conversation_id)?;
    assert_eq!(env.store.listener_count(), listeners + 1);

    subscription.unsubscribe();
    subscription.unsubscribe();

    assert!(!subscription.is_active());
    assert_eq!(env.store.listener_count(), listeners);

    jane.send(&conversation_id, "joe", "Anyone there?", None)
        .await?;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(updates.try_next().is_none());

    Ok(())
}

#[tokio::test]
async fn test_open_conversation_is_marked_read_on_receive() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let mut joe = env.client("joe");

    let conversation_id = joe.resolve("jane").await?;
    joe.start_session(&"joe".into());
    let (_subscription, mut updates) = joe.subscribe(&conversation_id)?;

    jane.resolve("joe").await?;
    jane.send(&conversation_id, "joe", "Nice splits today", None)
        .await?;
    joe.wait_for_conversation_change().await?;

    let items = updates.wait_for(|items| !items.is_empty()).await?;
    assert_eq!(items[0].sender_id(), &UserId::from("jane"));

    let mut unread = joe.unread_count(&conversation_id).await?;
    for _ in 0..20 {
        if unread == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
        unread = joe.unread_count(&conversation_id).await?;
    }
    assert_eq!(unread, 0);

    Ok(())
}
