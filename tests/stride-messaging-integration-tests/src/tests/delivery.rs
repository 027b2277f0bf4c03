// stride/stride-messaging-integration-tests
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use stride_messaging::dtos::UserId;
use stride_store::prelude::*;

use super::helpers::TestEnv;

#[tokio::test]
async fn test_delivery_increments_unread_and_mark_read_resets_it() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let mut joe = env.client("joe");

    let conversation_id = jane.resolve("joe").await?;
    jane.send(&conversation_id, "joe", "hi", None).await?;
    assert_eq!(env.pending_intent_count()?, 1);

    joe.start_session(&"joe".into());
    assert_eq!(joe.wait_for_conversation_change().await?, conversation_id);

    assert_eq!(joe.unread_count(&conversation_id).await?, 1);
    assert_eq!(
        env.stored_message_texts(&"joe".into(), &conversation_id)?,
        vec!["hi"]
    );
    assert_eq!(env.pending_intent_count()?, 0);

    let conversations = joe.conversations.load_conversations(&"joe".into()).await?;
    assert_eq!(conversations[0].last_message, "hi");
    assert_eq!(conversations[0].other_participant.display_name, "Jane Doe");

    joe.conversations
        .mark_read(&conversation_id, &"joe".into())
        .await?;

    assert_eq!(joe.unread_count(&conversation_id).await?, 0);
    assert_eq!(
        joe.conversations
            .total_unread_count(&"joe".into())
            .await?,
        0
    );
    assert_eq!(
        env.stored_message_texts(&"joe".into(), &conversation_id)?,
        vec!["hi"]
    );

    Ok(())
}

#[tokio::test]
async fn test_delivery_into_existing_conversation() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let mut joe = env.client("joe");

    let conversation_id = joe.resolve("jane").await?;
    jane.resolve("joe").await?;
    joe.start_session(&"joe".into());

    jane.send(&conversation_id, "joe", "Warm-up at 6:45", None)
        .await?;
    joe.wait_for_conversation_change().await?;
    jane.send(&conversation_id, "joe", "Bring gels", None).await?;
    joe.wait_for_conversation_change().await?;

    assert_eq!(joe.unread_count(&conversation_id).await?, 2);
    assert_eq!(jane.unread_count(&conversation_id).await?, 0);

    let messages = joe
        .messages
        .load_messages(&"joe".into(), &conversation_id)
        .await?;
    let texts = messages.iter().map(|m| m.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["Warm-up at 6:45", "Bring gels"]);
    assert!(messages.iter().all(|m| m.sender_id == UserId::from("jane")));

    Ok(())
}

#[tokio::test]
async fn test_failed_message_write_is_retried_without_duplicates() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let mut joe = env.client("joe");

    let conversation_id = jane.resolve("joe").await?;
    jane.send(&conversation_id, "joe", "hi", None).await?;

    env.store.fail_next(
        FaultSpec::new(format!("users/joe/conversations/{conversation_id}/messages"))
            .operation(Operation::Create),
    );

    joe.start_session(&"joe".into());
    joe.wait_for_conversation_change().await?;
    env.wait_until_delivered().await?;

    assert_eq!(
        env.stored_message_texts(&"joe".into(), &conversation_id)?,
        vec!["hi"]
    );
    assert_eq!(joe.unread_count(&conversation_id).await?, 1);

    Ok(())
}

#[tokio::test]
async fn test_failed_conversation_create_is_retried() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let mut joe = env.client("joe");

    let conversation_id = jane.resolve("joe").await?;
    jane.send(&conversation_id, "joe", "hi", None).await?;

    env.store.fail_next(
        FaultSpec::new(format!("users/joe/conversations/{conversation_id}"))
            .operation(Operation::Create)
            .times(2),
    );

    joe.start_session(&"joe".into());
    joe.wait_for_conversation_change().await?;

    assert_eq!(joe.unread_count(&conversation_id).await?, 1);
    assert_eq!(
        env.stored_message_texts(&"joe".into(), &conversation_id)?,
        vec!["hi"]
    );

    Ok(())
}

#[tokio::test]
async fn test_intents_wait_for_recipient_session() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let mut joe = env.client("joe");

    let conversation_id = jane.resolve("joe").await?;
    jane.send(&conversation_id, "joe", "Are you in?", None).await?;
    jane.send(&conversation_id, "joe", "Saturday 8am", None).await?;

    // Jane's session only picks up intents addressed to Jane.
    jane.start_session(&"jane".into());
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    assert_eq!(env.pending_intent_count()?, 2);

    joe.start_session(&"joe".into());
    joe.wait_for_conversation_change().await?;
    joe.wait_for_conversation_change().await?;

    assert_eq!(env.pending_intent_count()?, 0);
    assert_eq!(joe.unread_count(&conversation_id).await?, 2);
    assert_eq!(joe.session_user_id(), Some(UserId::from("joe")));

    joe.end_session();
    assert_eq!(joe.session_user_id(), None);

    Ok(())
}
