// stride/stride-messaging-integration-tests
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use stride_messaging::dtos::{ConversationError, ConversationId, SendMessageError, UserId};

use super::helpers::TestEnv;

#[tokio::test]
async fn test_both_participants_resolve_same_conversation() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let joe = env.client("joe");

    let from_jane = jane
        .conversations
        .resolve_or_create(&"jane".into(), &"joe".into())
        .await?;
    let from_joe = joe.resolve("jane").await?;

    assert_eq!(from_jane.conversation_id, ConversationId::from("jane__joe"));
    assert_eq!(from_jane.conversation_id, from_joe);
    assert_eq!(from_jane.other_participant.display_name, "Joe Runner");

    let conversations = joe.conversations.load_conversations(&"joe".into()).await?;
    assert_eq!(conversations.len(), 1);
    assert_eq!(conversations[0].other_participant.display_name, "Jane Doe");
    assert_eq!(conversations[0].unread_count, 0);

    Ok(())
}

#[tokio::test]
async fn test_resolving_is_idempotent() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");

    let first = jane.resolve("joe").await?;
    let second = jane.resolve("joe").await?;

    assert_eq!(first, second);
    assert_eq!(
        jane.conversations
            .load_conversations(&"jane".into())
            .await?
            .len(),
        1
    );

    Ok(())
}

#[tokio::test]
async fn test_unknown_participant_is_rejected() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");

    let result = jane
        .conversations
        .resolve_or_create(&"jane".into(), &"ghost".into())
        .await;

    assert!(matches!(
        result,
        Err(ConversationError::ParticipantNotFound(ref id)) if id == &UserId::from("ghost")
    ));
    assert!(jane
        .conversations
        .load_conversations(&"jane".into())
        .await?
        .is_empty());

    Ok(())
}

#[tokio::test]
async fn test_blank_message_writes_nothing() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");
    let conversation_id = jane.resolve("joe").await?;

    for text in ["", "   ", "\n\t "] {
        let result = jane.send(&conversation_id, "joe", text, None).await;
        assert!(matches!(result, Err(SendMessageError::EmptyMessage)));
    }

    assert!(env
        .stored_message_texts(&"jane".into(), &conversation_id)?
        .is_empty());
    assert_eq!(env.pending_intent_count()?, 0);

    Ok(())
}

#[tokio::test]
async fn test_inbox_lists_most_recent_conversation_first() -> Result<()> {
    let env = TestEnv::new()?;
    let jane = env.client("jane");

    let with_joe = jane.resolve("joe").await?;
    let with_kim = jane.resolve("kim").await?;
    jane.send(&with_joe, "joe", "Track at 7?", None).await?;

    let conversations = jane.conversations.load_conversations(&"jane".into()).await?;
    let ids = conversations
        .iter()
        .map(|c| c.id.clone())
        .collect::<Vec<_>>();

    assert_eq!(ids, vec![with_joe, with_kim]);
    assert_eq!(conversations[0].last_message, "Track at 7?");
    assert_eq!(conversations[0].unread_count, 0);

    Ok(())
}
