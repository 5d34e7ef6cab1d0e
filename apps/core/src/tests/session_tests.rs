//! Session Actor Tests
//!
//! Turn controller behavior with tokio's paused clock, so typing delays cost no
//! wall time.

use crate::actors::{
    ChannelSink, NullSink, SessionEvent, SessionHandle, TypingPacing,
};
use crate::brain::{templates, CourseAssistant, Intent, MatchMode};
use crate::config::AssistantConfig;
use crate::models::MessageKind;
use std::sync::Arc;
use tokio::time::{sleep, Duration};

fn spawn_session() -> SessionHandle {
    SessionHandle::spawn(
        CourseAssistant::new(),
        TypingPacing::default(),
        Arc::new(NullSink),
    )
}

async fn open_session() -> SessionHandle {
    let session = spawn_session();
    assert!(session.toggle().await.unwrap());
    session
}

#[tokio::test(start_paused = true)]
async fn test_session_starts_closed_with_welcome() {
    let session = spawn_session();

    let transcript = session.transcript().await.unwrap();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].kind, MessageKind::Bot);
    assert_eq!(transcript[0].content, templates::WELCOME);

    let status = session.status().await.unwrap();
    assert!(!status.is_open);
    assert!(!status.is_typing);
}

#[tokio::test(start_paused = true)]
async fn test_submit_ignored_while_closed() {
    let session = spawn_session();

    assert!(session.submit("What's the price?").await.unwrap().is_none());
    assert_eq!(session.transcript().await.unwrap().len(), 1);
    assert!(session.context().await.unwrap().last_intent.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_blank_input_ignored() {
    let session = open_session().await;

    assert!(session.submit("").await.unwrap().is_none());
    assert!(session.submit("   \t ").await.unwrap().is_none());

    assert_eq!(session.transcript().await.unwrap().len(), 1);
    assert!(session.context().await.unwrap().last_intent.is_none());
    assert!(!session.status().await.unwrap().is_typing);
}

#[tokio::test(start_paused = true)]
async fn test_reply_lands_after_typing_delay() {
    let session = open_session().await;
    let expected_delay = TypingPacing::default().delay_for(templates::PRICING_GENERIC);

    let receipt = session.submit("What's the price?").await.unwrap().unwrap();
    assert_eq!(receipt.intent, Intent::Pricing);
    assert_eq!(receipt.typing_delay_ms, expected_delay.as_millis() as u64);
    assert_eq!(receipt.queued_behind, 0);

    // User message and context are updated right away
    let transcript = session.transcript().await.unwrap();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].kind, MessageKind::User);
    assert_eq!(transcript[1].content, "What's the price?");
    assert_eq!(
        session.context().await.unwrap().last_intent,
        Some(Intent::Pricing)
    );
    assert!(session.status().await.unwrap().is_typing);

    sleep(expected_delay - Duration::from_millis(1)).await;
    assert_eq!(session.transcript().await.unwrap().len(), 2);

    sleep(Duration::from_millis(2)).await;
    let transcript = session.transcript().await.unwrap();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[2].kind, MessageKind::Bot);
    assert_eq!(transcript[2].content, templates::PRICING_GENERIC);
    assert!(!session.status().await.unwrap().is_typing);
}

#[tokio::test(start_paused = true)]
async fn test_replies_keep_submission_order() {
    let session = open_session().await;

    let first = session.submit("What's the price?").await.unwrap().unwrap();
    let second = session.submit("hi").await.unwrap().unwrap();
    assert_eq!(first.queued_behind, 0);
    assert_eq!(second.queued_behind, 1);
    assert_eq!(second.intent, Intent::Greeting);

    // Both user messages are in before any reply
    let status = session.status().await.unwrap();
    assert_eq!(status.pending_replies, 2);
    assert_eq!(status.message_count, 3);

    // The second reply waits for the first one
    sleep(Duration::from_millis(first.typing_delay_ms + 1)).await;
    assert_eq!(session.status().await.unwrap().pending_replies, 1);

    sleep(Duration::from_millis(second.typing_delay_ms)).await;
    let transcript = session.transcript().await.unwrap();
    let contents: Vec<&str> = transcript.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents.len(), 5);
    assert_eq!(contents[1], "What's the price?");
    assert_eq!(contents[2], "hi");
    assert_eq!(contents[3], templates::PRICING_GENERIC);
    // greeting goes to the default branch, which echoes the previous turn
    assert!(contents[4].contains("interested in pricing"));
}

#[tokio::test(start_paused = true)]
async fn test_general_turn_mentions_previous_intent() {
    let session = open_session().await;

    session.submit("What's the price?").await.unwrap();
    sleep(Duration::from_secs(4)).await;

    let receipt = session
        .submit("blah unrelated gibberish")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(receipt.intent, Intent::General);
    assert_eq!(
        session.context().await.unwrap().last_intent,
        Some(Intent::General)
    );

    sleep(Duration::from_secs(4)).await;
    let transcript = session.transcript().await.unwrap();
    let last = transcript.last().unwrap();
    assert_eq!(last.kind, MessageKind::Bot);
    assert!(last.content.contains("pricing"), "got: {}", last.content);
}

#[tokio::test(start_paused = true)]
async fn test_pending_reply_survives_close() {
    let session = open_session().await;

    session.submit("hi").await.unwrap().unwrap();
    assert!(!session.toggle().await.unwrap());

    sleep(Duration::from_secs(4)).await;
    let transcript = session.transcript().await.unwrap();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[2].content, templates::CAPABILITY_MENU);

    // History is still there after reopening
    assert!(session.toggle().await.unwrap());
    assert_eq!(session.transcript().await.unwrap().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_events_follow_turn() {
    let (sink, mut events) = ChannelSink::new();
    let session = SessionHandle::spawn(
        CourseAssistant::new(),
        TypingPacing::default(),
        Arc::new(sink),
    );

    session.toggle().await.unwrap();
    session.submit("hi").await.unwrap().unwrap();
    sleep(Duration::from_secs(4)).await;
    session.status().await.unwrap();

    let mut received = Vec::new();
    while let Ok((id, event)) = events.try_recv() {
        assert_eq!(id, session.id());
        received.push(event);
    }

    assert_eq!(received.len(), 6, "{:?}", received);
    assert!(matches!(&received[0], SessionEvent::MessageAppended(m) if m.content == templates::WELCOME));
    assert_eq!(received[1], SessionEvent::WidgetToggled(true));
    assert!(matches!(&received[2], SessionEvent::MessageAppended(m) if m.kind == MessageKind::User));
    assert_eq!(received[3], SessionEvent::TypingChanged(true));
    assert_eq!(received[4], SessionEvent::TypingChanged(false));
    assert!(matches!(&received[5], SessionEvent::MessageAppended(m) if m.kind == MessageKind::Bot));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_closes_session() {
    let session = open_session().await;
    session.submit("hi").await.unwrap();

    session.shutdown().await.unwrap();
    assert!(session.transcript().await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_from_config_uses_match_mode() {
    let config = AssistantConfig {
        match_mode: MatchMode::WholeWord,
        ..Default::default()
    };
    let session = SessionHandle::from_config(&config, Arc::new(NullSink)).unwrap();
    session.toggle().await.unwrap();

    let receipt = session.submit("chill").await.unwrap().unwrap();
    assert_eq!(receipt.intent, Intent::General);
}
