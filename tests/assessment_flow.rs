//! Integration tests driving a full assessment through the application layer.
//!
//! One respondent, start to report: conditional follow-ups taken, advisory
//! surfaced once, and the final scores checked against hand-computed values.

use std::sync::Arc;

use adoption_compass::adapters::memory::InMemorySessionStore;
use adoption_compass::application::handlers::assessment::{
    CurrentQuestionView, GetCurrentQuestionHandler, GetCurrentQuestionQuery, GetReportHandler,
    GetReportQuery, StartAssessmentHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use adoption_compass::domain::foundation::{AssessmentId, ErrorCode};
use adoption_compass::domain::scoring::RiskLevel;
use adoption_compass::domain::survey::{RawAnswer, Step, LARGE_ORG_ADVISORY};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct App {
    start: StartAssessmentHandler,
    question: GetCurrentQuestionHandler,
    submit: SubmitAnswerHandler,
    report: GetReportHandler,
}

impl App {
    fn new() -> Self {
        let store = Arc::new(InMemorySessionStore::new());
        Self {
            start: StartAssessmentHandler::new(store.clone()),
            question: GetCurrentQuestionHandler::new(store.clone()),
            submit: SubmitAnswerHandler::new(store.clone()),
            report: GetReportHandler::new(store),
        }
    }

    async fn begin(&self) -> AssessmentId {
        self.start.handle().await.unwrap().assessment_id
    }

    async fn answer(&self, id: AssessmentId, value: RawAnswer) -> Step {
        self.submit
            .handle(SubmitAnswerCommand {
                assessment_id: id,
                value,
            })
            .await
            .unwrap()
            .next_step
    }

    async fn choose(&self, id: AssessmentId, value: &str) -> Step {
        self.answer(id, RawAnswer::Text(value.to_string())).await
    }

    async fn view(&self, id: AssessmentId) -> CurrentQuestionView {
        self.question
            .handle(GetCurrentQuestionQuery { assessment_id: id })
            .await
            .unwrap()
    }
}

fn selections(values: &[&str]) -> RawAnswer {
    RawAnswer::Selections(values.iter().map(|s| s.to_string()).collect())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn full_walk_with_every_follow_up_produces_the_expected_report() {
    let app = App::new();
    let id = app.begin().await;

    assert!(matches!(app.view(id).await, CurrentQuestionView::Welcome { .. }));

    assert_eq!(app.answer(id, RawAnswer::Empty).await, Step::Q1);
    assert_eq!(app.choose(id, "Over 7,000").await, Step::Q2);

    // The large-org advisory rides along with the very next question.
    match app.view(id).await {
        CurrentQuestionView::Question { question, advisory } => {
            assert_eq!(question.step, Step::Q2);
            assert_eq!(advisory, Some(LARGE_ORG_ADVISORY));
        }
        other => panic!("Expected q2 view, got {:?}", other),
    }

    assert_eq!(app.choose(id, "Tech/Software").await, Step::Q3);
    assert_eq!(app.choose(id, "No, but we're exploring").await, Step::Q3Follow);
    assert_eq!(app.choose(id, "Current").await, Step::Q4);
    assert_eq!(app.answer(id, RawAnswer::Scale(3)).await, Step::Q5);
    assert_eq!(app.choose(id, "Sometimes").await, Step::Q6);
    assert_eq!(app.choose(id, "1-10").await, Step::Q6Follow);
    assert_eq!(app.choose(id, "Yes").await, Step::Q7);
    assert_eq!(app.choose(id, "Somewhat").await, Step::Q8);
    assert_eq!(app.choose(id, "Less than 5%").await, Step::Q9);
    assert_eq!(app.choose(id, "Yes, frequently").await, Step::Q9Follow);
    assert_eq!(
        app.choose(id, "Chatbot invented a discount policy").await,
        Step::Q10
    );
    assert_eq!(app.answer(id, RawAnswer::Scale(2)).await, Step::Q11);
    assert_eq!(app.choose(id, "Future impact").await, Step::Q12);
    assert_eq!(app.choose(id, "Some").await, Step::Q13);
    assert_eq!(app.choose(id, "Adequately").await, Step::Q14);
    assert_eq!(
        app.answer(id, selections(&["Microsoft 365 (Office, Teams)"])).await,
        Step::Q15
    );
    assert_eq!(app.answer(id, selections(&["Microsoft Copilot"])).await, Step::Q16);
    assert_eq!(
        app.answer(
            id,
            selections(&["Automate repetitive tasks (e.g., code gen, workflows)"])
        )
        .await,
        Step::Results
    );

    assert!(matches!(app.view(id).await, CurrentQuestionView::Complete));

    let view = app
        .report
        .handle(GetReportQuery { assessment_id: id })
        .await
        .unwrap();

    // Raw sums: organizational 1 + 2 + 2 = 5, talent 1 + 2 + 1 = 4,
    // technical 1 + 1.5 + 2 = 4.5, roi 2 + 2 = 4.
    assert_close(view.report.organizational, 50.0 / 9.0);
    assert_close(view.report.talent, 40.0 / 9.0);
    assert_close(view.report.technical, 5.0);
    assert_close(view.report.roi, 40.0 / 6.0);
    assert_close(view.report.overall, 65.0 / 12.0);
    assert_eq!(view.report.risk, RiskLevel::Medium);
    assert_eq!(
        view.report.recommendations,
        vec!["High fit for Copilot: Integrate with Teams for workflows.".to_string()]
    );

    assert_eq!(view.summary_lines[0], "Overall Maturity Score: 5.4/10");
    assert_eq!(view.summary_lines[1], "Risk Level: Medium Risk (Moderate Maturity)");
    assert!(view
        .summary_lines
        .iter()
        .any(|l| l.starts_with("Organizational: [#####-----]")));
    assert_eq!(
        view.summary_lines.last().unwrap(),
        "Tips: Focus on building an AI strategy and upskilling to reduce risks."
    );
}

#[tokio::test]
async fn report_before_completion_is_a_conflict() {
    let app = App::new();
    let id = app.begin().await;
    app.answer(id, RawAnswer::Empty).await;

    let err = app
        .report
        .handle(GetReportQuery { assessment_id: id })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::AssessmentNotComplete);
}

#[tokio::test]
async fn rejected_submission_keeps_the_session_on_the_same_step() {
    let app = App::new();
    let id = app.begin().await;
    app.answer(id, RawAnswer::Empty).await;

    let err = app
        .submit
        .handle(SubmitAnswerCommand {
            assessment_id: id,
            value: RawAnswer::Text("A million".to_string()),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    match app.view(id).await {
        CurrentQuestionView::Question { question, .. } => assert_eq!(question.step, Step::Q1),
        other => panic!("Expected q1 view, got {:?}", other),
    }
}

#[tokio::test]
async fn concurrent_respondents_do_not_share_state() {
    let app = App::new();
    let first = app.begin().await;
    let second = app.begin().await;

    app.answer(first, RawAnswer::Empty).await;
    app.choose(first, "Under 500").await;

    // The second respondent is still on the welcome screen.
    assert!(matches!(app.view(second).await, CurrentQuestionView::Welcome { .. }));
    match app.view(first).await {
        CurrentQuestionView::Question { question, .. } => assert_eq!(question.step, Step::Q2),
        other => panic!("Expected q2 view, got {:?}", other),
    }
}
