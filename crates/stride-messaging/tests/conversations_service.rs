// stride/stride-messaging
//
// Copyright: 2026, Stride Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use stride_messaging::dtos::{Conversation, ConversationId, ParticipantSnapshot, UserId};
use stride_messaging::services::ConversationsService;
use stride_messaging::test::{mock_data, MockAppDependencies};

fn conversation(id: &str, unread_count: u32) -> Conversation {
    Conversation {
        id: id.into(),
        members: vec![],
        created_at: mock_data::reference_date(),
        last_message_at: mock_data::reference_date(),
        last_message: String::new(),
        unread_count,
        other_participant: ParticipantSnapshot::default(),
    }
}

#[tokio::test]
async fn test_total_unread_count_sums_conversations() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.conversation_directory_service
        .expect_load_conversations()
        .once()
        .with(predicate::eq(UserId::from("jane")))
        .return_once(|_| {
            Box::pin(async {
                Ok(vec![
                    conversation("a__jane", 2),
                    conversation("jane__joe", 0),
                    conversation("jane__kim", 5),
                ])
            })
        });

    let service = ConversationsService::from(&deps.into_deps());
    assert_eq!(service.total_unread_count(&UserId::from("jane")).await?, 7);

    Ok(())
}

#[tokio::test]
async fn test_mark_read_resets_own_copy() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.read_state_tracker
        .expect_mark_read()
        .once()
        .with(
            predicate::eq(ConversationId::from("jane__joe")),
            predicate::eq(UserId::from("joe")),
        )
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    let service = ConversationsService::from(&deps.into_deps());
    service
        .mark_read(&ConversationId::from("jane__joe"), &UserId::from("joe"))
        .await?;

    Ok(())
}
