//! Command client tests against the fake service
//!
//! Run with: cargo test -p integration-tests --test command_tests

use ama_common::{ClientError, CommandKind};
use ama_core::{DomainError, QuestionId, RoomId};
use ama_service::{CommandService, QuestionFetcher};
use axum::http::StatusCode;
use integration_tests::{unique_room_name, TestServer};

// ============================================================================
// Rooms
// ============================================================================

#[tokio::test]
async fn test_create_room() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();

    let room = client.create_room("Demo").await.unwrap();

    assert_eq!(room.name, "Demo");
    assert!(!room.id.as_str().is_empty());
    assert!(room.created_at.is_some());
}

#[tokio::test]
async fn test_create_room_blank_name() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();

    let err = client.create_room("   ").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(DomainError::EmptyRoomName)));
}

// ============================================================================
// Questions
// ============================================================================

#[tokio::test]
async fn test_create_question() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();
    let room_id = server.create_room(&unique_room_name()).await.unwrap();

    let question = client.create_question(&room_id, "What time?").await.unwrap();

    assert_eq!(question.room_id, room_id);
    assert_eq!(question.text, "What time?");
    assert_eq!(question.reaction_count, 0);
    assert!(!question.is_answered);
}

#[tokio::test]
async fn test_create_question_unknown_room() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();

    let err = client
        .create_question(&RoomId::new("missing"), "What time?")
        .await
        .unwrap_err();

    match err {
        ClientError::Remote {
            command,
            status,
            message,
        } => {
            assert_eq!(command, CommandKind::CreateQuestion);
            assert_eq!(status, 404);
            assert_eq!(message, "Room not found");
        }
        other => panic!("expected remote failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_injected_failure_surfaces_as_remote() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();
    let room_id = server.create_room(&unique_room_name()).await.unwrap();

    server.service.fail_next(StatusCode::INTERNAL_SERVER_ERROR).await;
    let err = client.create_question(&room_id, "What time?").await.unwrap_err();

    assert!(err.is_remote());
    assert_eq!(err.error_code(), "REMOTE_FAILURE");
    assert_eq!(err.user_message(), "An error occurred while creating the question");
    assert!(err.to_string().contains("Something went wrong"));
}

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_add_and_remove_reaction() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();
    let room_id = server.create_room(&unique_room_name()).await.unwrap();
    let question = client.create_question(&room_id, "What time?").await.unwrap();

    client.add_reaction(&room_id, &question.id).await.unwrap();
    client.add_reaction(&room_id, &question.id).await.unwrap();
    assert_eq!(
        server
            .service
            .reaction_count(room_id.as_str(), question.id.as_str())
            .await,
        Some(2)
    );

    client.remove_reaction(&room_id, &question.id).await.unwrap();
    assert_eq!(
        server
            .service
            .reaction_count(room_id.as_str(), question.id.as_str())
            .await,
        Some(1)
    );
}

#[tokio::test]
async fn test_reaction_unknown_question() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();
    let room_id = server.create_room(&unique_room_name()).await.unwrap();

    let err = client
        .add_reaction(&room_id, &QuestionId::new("missing"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Remote { command: CommandKind::AddReaction, status: 404, .. }
    ));
}

// ============================================================================
// Answering
// ============================================================================

#[tokio::test]
async fn test_mark_answered() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();
    let room_id = server.create_room(&unique_room_name()).await.unwrap();
    let question = client.create_question(&room_id, "Slides?").await.unwrap();

    client.mark_answered(&room_id, &question.id).await.unwrap();
    // Idempotent on the service side
    client.mark_answered(&room_id, &question.id).await.unwrap();

    assert_eq!(
        server
            .service
            .is_answered(room_id.as_str(), question.id.as_str())
            .await,
        Some(true)
    );
}

#[tokio::test]
async fn test_mark_answered_unknown_question() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();
    let room_id = server.create_room(&unique_room_name()).await.unwrap();

    let err = client
        .mark_answered(&room_id, &QuestionId::new("missing"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Remote { command: CommandKind::MarkAnswered, status: 404, .. }
    ));
    assert_eq!(
        err.user_message(),
        "An error occurred while marking the question as answered"
    );
}

// ============================================================================
// Bulk Fetch
// ============================================================================

#[tokio::test]
async fn test_fetch_empty_room() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();
    let room_id = server.create_room(&unique_room_name()).await.unwrap();

    let page = client.fetch_questions(&room_id).await.unwrap();

    assert!(page.questions.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_fetch_questions() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();
    let room_id = server.create_room(&unique_room_name()).await.unwrap();

    let first = client.create_question(&room_id, "First").await.unwrap();
    client.create_question(&room_id, "Second").await.unwrap();
    client.add_reaction(&room_id, &first.id).await.unwrap();

    let page = client.fetch_questions(&room_id).await.unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.questions.len(), 2);
    assert_eq!(page.questions[0].id, first.id);
    assert_eq!(page.questions[0].reaction_count, 1);
    assert!(page.questions.iter().all(|q| q.room_id == room_id));
}
