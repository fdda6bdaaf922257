use menugram_core::{ContentRequest, Flow, MenuItem, PostType};
use menugram_error::{SessionErrorKind, ValidationErrorKind};
use menugram_studio::{GenerationSession, SessionState, StudioConfig};
use menugram_templates::{RandomSampler, SequenceSampler};
use std::time::Duration;

fn request(name: &str) -> ContentRequest {
    ContentRequest::new(name, "@handle", PostType::Menu)
        .with_menu_items(vec![MenuItem::new("Truffle Arancini", "Crispy risotto balls")])
}

fn session(flow: Flow) -> GenerationSession {
    GenerationSession::from_config(flow, &StudioConfig::default(), RandomSampler::seeded(4))
}

#[tokio::test(start_paused = true)]
async fn content_appears_after_the_delay() {
    let session = session(Flow::Post);
    assert_eq!(session.state(), SessionState::Idle);

    session.submit(request("Bella Vista")).unwrap();
    assert!(session.state().is_generating());

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(session.state().is_generating());

    let content = session.wait_ready().await.unwrap();
    assert_eq!(content.hashtags()[1], "#BellaVista");
    assert_eq!(session.state().content(), Some(&content));
}

#[tokio::test(start_paused = true)]
async fn invalid_request_leaves_state_alone() {
    let session = session(Flow::Post);

    let err = session
        .submit(ContentRequest::new("", "@handle", PostType::Single))
        .unwrap_err();

    assert_eq!(err.kind, ValidationErrorKind::MissingRestaurantName);
    assert_eq!(session.state(), SessionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn resubmitting_discards_the_earlier_result() {
    let session = session(Flow::Post);
    let mut updates = session.subscribe();

    session.submit(request("First Place")).unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    session.submit(request("Second Place")).unwrap();

    let content = session.wait_ready().await.unwrap();
    assert_eq!(content.hashtags()[1], "#SecondPlace");

    tokio::time::sleep(Duration::from_secs(10)).await;
    let latest = updates.borrow_and_update().clone();
    assert_eq!(latest.content().map(|c| c.hashtags()[1].as_str()), Some("#SecondPlace"));
}

#[tokio::test(start_paused = true)]
async fn cancel_returns_to_idle_and_never_publishes() {
    let session = session(Flow::Post);

    session.submit(request("Bella Vista")).unwrap();
    session.cancel();
    assert_eq!(session.state(), SessionState::Idle);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(session.state(), SessionState::Idle);

    let err = session.wait_ready().await.unwrap_err();
    assert_eq!(err.kind, SessionErrorKind::Cancelled);
}

#[tokio::test(start_paused = true)]
async fn cancel_keeps_earlier_content() {
    let session = session(Flow::Post);
    session.submit(request("Bella Vista")).unwrap();
    let first = session.wait_ready().await.unwrap();

    session.submit(request("Other Place")).unwrap();
    session.cancel();

    assert_eq!(session.state(), SessionState::Ready(first));
}

#[tokio::test(start_paused = true)]
async fn regenerate_requires_content() {
    let session = session(Flow::Post);

    let err = session.regenerate_caption().unwrap_err();

    assert_eq!(err.kind, SessionErrorKind::NothingToRegenerate);
}

#[tokio::test(start_paused = true)]
async fn regenerate_replaces_only_the_caption() {
    let mut config = StudioConfig::default();
    config.generation.regenerate_delay_ms = 300;
    let session =
        GenerationSession::from_config(Flow::Post, &config, SequenceSampler::new(vec![0, 0, 1]));

    session.submit(request("Bella Vista")).unwrap();
    let first = session.wait_ready().await.unwrap();

    session.regenerate_caption().unwrap();
    assert!(session.state().is_generating());
    tokio::time::sleep(Duration::from_millis(299)).await;
    assert!(session.state().is_generating());

    let second = session.wait_ready().await.unwrap();
    assert_ne!(first.caption(), second.caption());
    assert_eq!(first.clone().with_caption(second.caption().clone()), second);
}

#[tokio::test(start_paused = true)]
async fn batch_sessions_include_a_story_caption() {
    let session = session(Flow::Batch);

    session.submit(request("Bella Vista")).unwrap();
    let content = session.wait_ready().await.unwrap();

    assert!(content.story_caption().is_some());
}
