//! Interview Flow Integration Tests
//!
//! Drives sessions through the flow controller against the scripted model:
//! - Opening: greeting and first question, retry and fallback
//! - Turns: probe versus pivot, message layout, counters
//! - Failures leave the session unchanged
//! - Exit phrases, summaries and reset

use talent_scout::models::session::{InterviewSession, InterviewStage};
use talent_scout::services::interview::{TurnOutcome, CLOSING_MESSAGE};
use talent_scout::AppError;
use talent_scout_llm::{LlmError, MessageRole};

use crate::support::{controller, raw_profile, MockLlmProvider, SATISFACTORY, UNSATISFACTORY};

// ============================================================================
// Helpers
// ============================================================================

async fn opened(
    provider: &std::sync::Arc<MockLlmProvider>,
    experience: i64,
) -> (talent_scout::services::InterviewFlowController, InterviewSession) {
    let flow = controller(provider.clone());
    let mut session = InterviewSession::new("session-1");
    flow.start(&mut session, &raw_profile(experience, "Python, React, SQL"))
        .unwrap();
    flow.open(&mut session).await.unwrap();
    (flow, session)
}

// ============================================================================
// Opening
// ============================================================================

#[tokio::test]
async fn test_open_uses_tier_and_first_line() {
    let provider = MockLlmProvider::new();
    provider.reply("[Python] What does the GIL protect?\n[React] What is JSX?\n[SQL] Explain joins.");
    let (_, session) = opened(&provider, 6).await;

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].messages[0].role, MessageRole::System);
    assert!(requests[0]
        .instruction()
        .contains("Generate 5 technical interview questions for a senior developer"));
    assert_eq!(requests[0].options.temperature_override, Some(0.7));
    assert_eq!(requests[0].options.max_tokens_override, Some(500));

    assert_eq!(session.stage(), InterviewStage::InProgress);
    assert!(session.greeting_sent());
    assert_eq!(session.current_question(), Some("[Python] What does the GIL protect?"));
    assert_eq!(session.current_topic(), Some("Python"));
    assert_eq!(session.questions_asked(), 0);

    let messages = session.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].content.contains("Backend Engineer position"));
    assert!(messages[0].content.contains("Python, React, SQL"));
    assert_eq!(
        messages[1].content,
        "Let's start with this technical question:\n\n[Python] What does the GIL protect?"
    );
}

#[tokio::test]
async fn test_open_retries_then_falls_back() {
    let provider = MockLlmProvider::new();
    provider.reply("").reply("\n  \n");
    let (_, session) = opened(&provider, 1).await;

    assert_eq!(provider.request_count(), 2);
    assert!(session.current_question().unwrap().starts_with("[Python] "));
    assert_eq!(session.current_topic(), Some("Python"));
}

#[tokio::test]
async fn test_question_without_tag_is_general() {
    let provider = MockLlmProvider::new();
    provider.reply("Describe your favourite data structure.");
    let (_, session) = opened(&provider, 3).await;

    assert_eq!(session.current_topic(), Some("General"));
}

#[tokio::test]
async fn test_open_before_start_is_rejected() {
    let provider = MockLlmProvider::new();
    let flow = controller(provider.clone());
    let mut session = InterviewSession::new("session-1");

    let err = flow.open(&mut session).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
    assert_eq!(provider.request_count(), 0);
}

// ============================================================================
// Turns
// ============================================================================

#[tokio::test]
async fn test_satisfactory_answer_pivots_topic() {
    let provider = MockLlmProvider::new();
    provider
        .reply("[Python] What does the GIL protect?")
        .reply(SATISFACTORY)
        .reply("Accurate and concise.")
        .reply("[React] When would you reach for useMemo?");
    let (flow, mut session) = opened(&provider, 3).await;

    let outcome = flow
        .process_turn(&mut session, "Interpreter state across threads")
        .await
        .unwrap();

    let TurnOutcome::Answered {
        evaluation,
        analysis,
        next_question,
    } = outcome
    else {
        panic!("Expected an answered turn");
    };
    assert!(evaluation.is_satisfactory);
    assert_eq!(evaluation.score, 8);
    assert_eq!(analysis.analysis, "Accurate and concise.");
    assert_eq!(next_question, "[React] When would you reach for useMemo?");

    assert_eq!(session.current_topic(), Some("React"));
    assert_eq!(session.questions_asked(), 1);
    assert_eq!(session.messages().len(), 4);
    assert_eq!(session.messages()[2].role, MessageRole::User);
    assert_eq!(
        session.messages()[3].content,
        "**Analysis of your response:**\nAccurate and concise.\n\n**Evaluation:**\n\n- Feedback: Clear and correct.\n\n**Next Question:**\n[React] When would you reach for useMemo?"
    );

    let requests = provider.requests();
    assert_eq!(requests.len(), 4);
    assert!(requests[1].instruction().contains("Score: [number]"));
    assert_eq!(requests[1].options.temperature_override, Some(0.3));
    assert!(requests[3].instruction().contains("different topic"));
    assert_eq!(requests[3].options.max_tokens_override, Some(200));
}

#[tokio::test]
async fn test_unsatisfactory_answer_probes_same_topic() {
    let provider = MockLlmProvider::new();
    provider
        .reply("[Python] What does the GIL protect?")
        .reply(UNSATISFACTORY)
        .reply("Too shallow.")
        .reply("[SQL] How do indexes speed up lookups?");
    let (flow, mut session) = opened(&provider, 3).await;

    flow.process_turn(&mut session, "Something about locks")
        .await
        .unwrap();

    // topic only moves after a satisfactory answer
    assert_eq!(session.current_topic(), Some("Python"));
    assert_eq!(
        session.current_question(),
        Some("[SQL] How do indexes speed up lookups?")
    );
    let follow_up = provider.requests()[3].instruction().to_string();
    assert!(follow_up.contains("Previous Response: Something about locks"));
    assert!(follow_up.contains("current_topic: Python"));
}

#[tokio::test]
async fn test_malformed_evaluation_degrades() {
    let provider = MockLlmProvider::new();
    provider
        .reply("[Python] q1")
        .reply("The candidate seems fine overall.")
        .reply("ok")
        .reply("[Python] q2");
    let (flow, mut session) = opened(&provider, 3).await;

    let outcome = flow.process_turn(&mut session, "answer").await.unwrap();
    let TurnOutcome::Answered { evaluation, .. } = outcome else {
        panic!("Expected an answered turn");
    };
    assert!(!evaluation.is_satisfactory);
    assert_eq!(evaluation.score, 0);
    assert_eq!(evaluation.feedback, "");
    assert_eq!(session.questions_asked(), 1);
}

#[tokio::test]
async fn test_gateway_failure_mid_turn_leaves_session_unchanged() {
    let provider = MockLlmProvider::new();
    provider
        .reply("[Python] q1")
        .reply(SATISFACTORY)
        .reply("analysis")
        .fail(LlmError::RateLimited {
            message: "slow down".to_string(),
            retry_after: None,
        });
    let (flow, mut session) = opened(&provider, 3).await;
    let before = session.clone();

    let err = flow.process_turn(&mut session, "my answer").await.unwrap_err();
    assert!(matches!(err, AppError::Gateway(_)));
    assert_eq!(session, before);

    // the same input succeeds once the backend recovers
    provider
        .reply(SATISFACTORY)
        .reply("analysis")
        .reply("[React] q2");
    flow.process_turn(&mut session, "my answer").await.unwrap();
    assert_eq!(session.questions_asked(), 1);
    assert_eq!(session.messages().len(), 4);
}

// ============================================================================
// Ending
// ============================================================================

#[tokio::test]
async fn test_exit_phrase_closes_interview() {
    let provider = MockLlmProvider::new();
    provider.reply("[Python] q1");
    let (flow, mut session) = opened(&provider, 3).await;

    let outcome = flow.process_turn(&mut session, "END INTERVIEW").await.unwrap();

    assert_eq!(outcome, TurnOutcome::Ended);
    assert_eq!(session.stage(), InterviewStage::Ended);
    assert_eq!(session.messages().len(), 3);
    assert_eq!(session.messages()[2].content, CLOSING_MESSAGE);
    assert_eq!(provider.request_count(), 1);

    let err = flow.process_turn(&mut session, "more").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
}

#[tokio::test]
async fn test_summary_covers_assistant_messages() {
    let provider = MockLlmProvider::new();
    provider
        .reply("[Python] q1")
        .reply(SATISFACTORY)
        .reply("solid")
        .reply("[React] q2")
        .reply("  Overall Performance: 8/10  ");
    let (flow, mut session) = opened(&provider, 3).await;
    flow.process_turn(&mut session, "answer").await.unwrap();
    flow.process_turn(&mut session, "exit").await.unwrap();

    let summary = flow.end_interview(&mut session).await.unwrap();

    assert_eq!(summary, "Overall Performance: 8/10");
    assert!(session.summary_ready());
    assert_eq!(session.summary(), Some("Overall Performance: 8/10"));
    assert_eq!(session.stage(), InterviewStage::Ended);

    let request = provider.requests().last().cloned().unwrap();
    let body = request.instruction();
    assert!(body.contains("Questions Asked: 1"));
    assert!(body.contains("Name: Jane Doe"));
    assert!(body.contains(CLOSING_MESSAGE));
    assert!(!body.contains("\nanswer\n"));
}

#[tokio::test]
async fn test_reset_returns_to_profile_collection() {
    let provider = MockLlmProvider::new();
    provider.reply("[Python] q1");
    let (flow, mut session) = opened(&provider, 3).await;

    flow.reset(&mut session);

    assert_eq!(session.id(), "session-1");
    assert_eq!(session.stage(), InterviewStage::CollectingProfile);
    assert!(session.profile().is_none());
    assert!(session.messages().is_empty());
    assert!(!session.greeting_sent());
    assert_eq!(session.current_question(), None);

    flow.start(&mut session, &raw_profile(1, "Go")).unwrap();
    assert_eq!(session.profile().unwrap().tech_stack(), ["Go".to_string()]);
}
