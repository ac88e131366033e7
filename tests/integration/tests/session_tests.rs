//! End-to-end room session tests
//!
//! A real command client and WebSocket channel against the fake service.
//!
//! Run with: cargo test -p integration-tests --test session_tests

use std::time::Duration;

use ama_cache::MergeOutcome;
use ama_service::CommandService;
use integration_tests::{
    created_frame, malformed_frames, next_outcome, unique_room_name, wait_until, TestServer,
};

#[tokio::test]
async fn test_room_question_reaction_scenario() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room_id = server.create_room("Demo").await.unwrap();
    let mut session = server.open_session(&room_id).await.unwrap();
    assert!(session.is_connected());
    assert_eq!(session.total(), 0);

    let question = session.create_question("What time?").await.unwrap();
    let snapshot = session.snapshot();
    assert_eq!(snapshot.questions.len(), 1);
    assert_eq!(snapshot.questions[0].text, "What time?");
    assert_eq!(snapshot.total, 1);

    assert!(session.toggle_reaction(&question.id).await.unwrap());
    assert!(session.is_reacted(&question.id));

    // The count only moves with the service's notification
    wait_until(&mut session, |s| s.snapshot().questions[0].reaction_count == 1)
        .await
        .unwrap();

    // The creation echo never counts twice
    session.process_pending();
    assert_eq!(session.total(), 1);
    assert_eq!(session.snapshot().questions.len(), 1);
}

#[tokio::test]
async fn test_two_clients_converge() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room_id = server.create_room(&unique_room_name()).await.unwrap();
    let mut alice = server.open_session(&room_id).await.unwrap();
    let mut bob = server.open_session(&room_id).await.unwrap();

    let question = alice.create_question("Is it recorded?").await.unwrap();
    wait_until(&mut bob, |s| s.total() == 1).await.unwrap();

    assert!(bob.toggle_reaction(&question.id).await.unwrap());
    wait_until(&mut alice, |s| s.snapshot().questions[0].reaction_count == 1)
        .await
        .unwrap();

    // The shared count moved, but alice never reacted
    assert!(!alice.is_reacted(&question.id));
    assert!(bob.is_reacted(&question.id));

    assert!(!bob.toggle_reaction(&question.id).await.unwrap());
    wait_until(&mut alice, |s| s.snapshot().questions[0].reaction_count == 0)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_open_seeds_existing_questions_in_order() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();
    let room_id = server.create_room(&unique_room_name()).await.unwrap();

    let a = client.create_question(&room_id, "A").await.unwrap();
    let b = client.create_question(&room_id, "B").await.unwrap();
    let c = client.create_question(&room_id, "C").await.unwrap();
    client.add_reaction(&room_id, &c.id).await.unwrap();
    client.add_reaction(&room_id, &c.id).await.unwrap();
    client.add_reaction(&room_id, &a.id).await.unwrap();

    let session = server.open_session(&room_id).await.unwrap();
    let snapshot = session.snapshot();

    assert_eq!(
        snapshot.ids(),
        vec![c.id.as_str(), a.id.as_str(), b.id.as_str()]
    );
    assert_eq!(snapshot.total, 3);
}

#[tokio::test]
async fn test_answered_notification() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room_id = server.create_room(&unique_room_name()).await.unwrap();
    let mut session = server.open_session(&room_id).await.unwrap();
    let question = session.create_question("Slides?").await.unwrap();

    session.mark_answered(&question.id).await.unwrap();

    wait_until(&mut session, |s| s.snapshot().questions[0].is_answered)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_malformed_frames_do_not_break_channel() {
    let server = TestServer::start().await.expect("Failed to start server");
    let room_id = server.create_room(&unique_room_name()).await.unwrap();
    let mut session = server.open_session(&room_id).await.unwrap();

    for frame in malformed_frames() {
        server.service.broadcast_raw(room_id.as_str(), frame).await;
    }
    server
        .service
        .broadcast_raw(room_id.as_str(), created_frame("q-live", "Still here?"))
        .await;

    assert_eq!(next_outcome(&mut session).await.unwrap(), MergeOutcome::Applied);
    assert!(session.is_connected());
    assert_eq!(session.snapshot().ids(), vec!["q-live"]);
}

#[tokio::test]
async fn test_close_releases_socket_and_stops_updates() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();
    let room_id = server.create_room(&unique_room_name()).await.unwrap();
    let mut session = server.open_session(&room_id).await.unwrap();
    server.wait_for_subscribers(&room_id, 1).await.unwrap();

    session.close();
    server.wait_for_subscribers(&room_id, 0).await.unwrap();

    client.create_question(&room_id, "Anyone?").await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(session.process_pending(), 0);
    assert_eq!(session.next_event().await, None);
    assert!(session.snapshot().questions.is_empty());
}

#[tokio::test]
async fn test_reconnect_and_refresh() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.command_client().unwrap();
    let room_id = server.create_room(&unique_room_name()).await.unwrap();
    let mut session = server.open_session(&room_id).await.unwrap();

    server.service.disconnect_subscribers(room_id.as_str()).await;
    assert_eq!(session.next_event().await, None);
    assert!(!session.is_connected());

    // Posted while nobody was listening
    let missed = client.create_question(&room_id, "Missed?").await.unwrap();

    let channel = server.open_channel(&room_id).await.unwrap();
    session.reopen_channel(channel).unwrap();
    assert!(session.is_connected());
    session.refresh(&client).await.unwrap();
    assert_eq!(session.snapshot().ids(), vec![missed.id.as_str()]);

    // Live again
    client.add_reaction(&room_id, &missed.id).await.unwrap();
    wait_until(&mut session, |s| s.snapshot().questions[0].reaction_count == 1)
        .await
        .unwrap();
}
