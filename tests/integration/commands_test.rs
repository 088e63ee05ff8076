//! Command Layer Integration Tests
//!
//! The full session lifecycle through the public commands, as a UI
//! collaborator would drive it.

use std::sync::Arc;

use talent_scout::models::settings::SettingsUpdate;
use talent_scout::services::interview::TurnOutcome;
use talent_scout::storage::ConfigService;
use talent_scout::{commands, AppState, InterviewStage};
use talent_scout_core::RawProfile;
use tempfile::TempDir;

use crate::support::{gateway, raw_profile, MockLlmProvider, SATISFACTORY};

fn create_state(provider: Arc<MockLlmProvider>) -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ConfigService::load_from(dir.path().join("config.json")).unwrap();
    config
        .apply_overrides(SettingsUpdate {
            export_dir: Some(dir.path().join("summaries")),
            ..Default::default()
        })
        .unwrap();
    (AppState::new(config, gateway(provider)), dir)
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    let provider = MockLlmProvider::new();
    provider
        .reply("[Python] What is a context manager?")
        .reply(SATISFACTORY)
        .reply("Well explained.")
        .reply("[React] What triggers a re-render?")
        .reply("Overall Performance: 7/10");
    let (state, dir) = create_state(provider.clone());

    let created = commands::create_session(&state).await.into_result().unwrap();
    assert_eq!(created.stage, InterviewStage::CollectingProfile);
    assert!(created.snapshot.is_none());
    let id = created.id;

    let started = commands::start_interview(&state, &id, raw_profile(4, "Python, React"))
        .await
        .into_result()
        .unwrap();
    assert_eq!(started.stage, InterviewStage::InProgress);
    let snapshot = started.snapshot.unwrap();
    assert_eq!(snapshot.full_name, "Jane Doe");
    assert_eq!(snapshot.tech_stack, "Python, React");
    assert_eq!(snapshot.questions_asked, 0);

    let opened = commands::open_interview(&state, &id).await.into_result().unwrap();
    assert_eq!(opened.messages.len(), 2);
    assert_eq!(opened.current_topic.as_deref(), Some("Python"));

    let turn = commands::send_message(&state, &id, "It implements __enter__ and __exit__")
        .await
        .into_result()
        .unwrap();
    assert!(matches!(turn.outcome, TurnOutcome::Answered { .. }));
    assert_eq!(turn.session.messages.len(), 4);
    assert_eq!(turn.session.snapshot.unwrap().questions_asked, 1);

    let summary = commands::end_interview(&state, &id).await.into_result().unwrap();
    assert_eq!(summary, "Overall Performance: 7/10");

    let download = commands::download_summary(&state, &id)
        .await
        .into_result()
        .unwrap();
    assert!(download.filename.starts_with("interview_summary_Jane_Doe_"));
    assert!(download.filename.ends_with(".txt"));
    assert_eq!(download.content, summary);

    let path = commands::export_summary(&state, &id).await.into_result().unwrap();
    assert!(path.starts_with(&dir.path().join("summaries").display().to_string()));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), summary);

    let view = commands::get_session(&state, &id).await.into_result().unwrap();
    assert!(view.summary_ready);
    assert_eq!(view.stage, InterviewStage::InProgress);
}

#[tokio::test]
async fn test_invalid_profile_lists_missing_fields() {
    let provider = MockLlmProvider::new();
    let (state, _dir) = create_state(provider);
    let id = commands::create_session(&state).await.into_result().unwrap().id;

    let response = commands::start_interview(
        &state,
        &id,
        RawProfile {
            full_name: "Jane Doe".to_string(),
            ..Default::default()
        },
    )
    .await;

    assert!(!response.success);
    let error = response.error.unwrap();
    assert!(error.contains("Email"));
    assert!(error.contains("Phone"));
    assert!(error.contains("Position Applied For"));
    assert!(error.contains("Tech Stack"));
    assert!(!error.contains("Full Name"));

    let view = commands::get_session(&state, &id).await.into_result().unwrap();
    assert_eq!(view.stage, InterviewStage::CollectingProfile);
}

#[tokio::test]
async fn test_start_new_interview_resets_session() {
    let provider = MockLlmProvider::new();
    provider.reply("[Go] What is a goroutine?");
    let (state, _dir) = create_state(provider);
    let id = commands::create_session(&state).await.into_result().unwrap().id;
    commands::start_interview(&state, &id, raw_profile(2, "Go"))
        .await
        .into_result()
        .unwrap();
    commands::open_interview(&state, &id).await.into_result().unwrap();

    let view = commands::start_new_interview(&state, &id)
        .await
        .into_result()
        .unwrap();

    assert_eq!(view.id, id);
    assert_eq!(view.stage, InterviewStage::CollectingProfile);
    assert!(view.messages.is_empty());
    assert!(view.snapshot.is_none());
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let provider = MockLlmProvider::new();
    provider.reply("[Go] q1");
    let (state, _dir) = create_state(provider);
    let first = commands::create_session(&state).await.into_result().unwrap().id;
    let second = commands::create_session(&state).await.into_result().unwrap().id;

    commands::start_interview(&state, &first, raw_profile(2, "Go"))
        .await
        .into_result()
        .unwrap();
    commands::open_interview(&state, &first).await.into_result().unwrap();

    let other = commands::get_session(&state, &second).await.into_result().unwrap();
    assert_eq!(other.stage, InterviewStage::CollectingProfile);
    assert!(other.messages.is_empty());
}

#[tokio::test]
async fn test_health_reports_provider() {
    let provider = MockLlmProvider::new();
    let (state, _dir) = create_state(provider);
    commands::create_session(&state).await;

    let health = commands::check_health(&state).await.into_result().unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.provider, "mock");
    assert_eq!(health.model, "mock-model");
    assert!(health.provider_reachable);
    assert_eq!(health.active_sessions, 1);

    let settings = commands::get_settings(&state).await.into_result().unwrap();
    assert_eq!(settings.request_timeout_secs, 60);
}
