//! GetCurrentQuestionHandler - what should the surface render right now?

use std::sync::Arc;

use crate::domain::foundation::{AssessmentId, DomainError};
use crate::domain::survey::{Question, Step};
use crate::ports::SessionStore;

/// Introductory copy shown at the `start` step.
pub const WELCOME_LINES: &[&str] = &[
    "This tool helps mid-market companies (up to 7,000 employees) evaluate AI integration challenges.",
    "Answer the questions honestly. Let's begin!",
];

/// Query for the current display state of an assessment.
#[derive(Debug, Clone)]
pub struct GetCurrentQuestionQuery {
    pub assessment_id: AssessmentId,
}

/// What the rendering surface should display.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentQuestionView {
    /// The session has not begun; show the welcome copy and a Start control.
    Welcome { lines: &'static [&'static str] },
    /// Show a question, with the one-shot advisory if armed.
    Question {
        question: &'static Question,
        advisory: Option<&'static str>,
    },
    /// Terminal marker; the surface should fetch the report.
    Complete,
}

/// Handler for the current-question query.
pub struct GetCurrentQuestionHandler {
    store: Arc<dyn SessionStore>,
}

impl GetCurrentQuestionHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Resolves the view for the session's current step.
    ///
    /// Displaying a question consumes the pending advisory: the cleared
    /// flag is written back so the advisory can never reappear.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` for an unknown assessment id
    pub async fn handle(
        &self,
        query: GetCurrentQuestionQuery,
    ) -> Result<CurrentQuestionView, DomainError> {
        let mut state = self
            .store
            .get(&query.assessment_id)
            .await?
            .ok_or_else(|| DomainError::session_not_found(&query.assessment_id))?;

        let view = match state.step() {
            Step::Start => CurrentQuestionView::Welcome { lines: WELCOME_LINES },
            Step::Results => CurrentQuestionView::Complete,
            step => {
                let question = state.current_question().ok_or_else(|| {
                    DomainError::unknown_step(format!("No question for {}", step))
                })?;
                let advisory = state.take_advisory();
                if advisory.is_some() {
                    self.store.update(&query.assessment_id, state.clone()).await?;
                }
                CurrentQuestionView::Question { question, advisory }
            }
        };

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySessionStore;
    use crate::application::handlers::assessment::StartAssessmentHandler;
    use crate::application::handlers::assessment::{SubmitAnswerCommand, SubmitAnswerHandler};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::survey::{RawAnswer, LARGE_ORG_ADVISORY};

    struct Fixture {
        store: Arc<InMemorySessionStore>,
        question: GetCurrentQuestionHandler,
        submit: SubmitAnswerHandler,
    }

    impl Fixture {
        fn new() -> Self {
            let store = Arc::new(InMemorySessionStore::new());
            Self {
                store: store.clone(),
                question: GetCurrentQuestionHandler::new(store.clone()),
                submit: SubmitAnswerHandler::new(store),
            }
        }

        async fn started(&self) -> AssessmentId {
            StartAssessmentHandler::new(self.store.clone())
                .handle()
                .await
                .unwrap()
                .assessment_id
        }

        async fn submit(&self, id: AssessmentId, value: RawAnswer) {
            self.submit
                .handle(SubmitAnswerCommand {
                    assessment_id: id,
                    value,
                })
                .await
                .unwrap();
        }

        async fn view(&self, id: AssessmentId) -> CurrentQuestionView {
            self.question
                .handle(GetCurrentQuestionQuery { assessment_id: id })
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn fresh_session_shows_welcome() {
        let fixture = Fixture::new();
        let id = fixture.started().await;
        assert_eq!(
            fixture.view(id).await,
            CurrentQuestionView::Welcome { lines: WELCOME_LINES }
        );
    }

    #[tokio::test]
    async fn after_start_shows_first_question_without_advisory() {
        let fixture = Fixture::new();
        let id = fixture.started().await;
        fixture.submit(id, RawAnswer::Empty).await;

        match fixture.view(id).await {
            CurrentQuestionView::Question { question, advisory } => {
                assert_eq!(question.step, Step::Q1);
                assert_eq!(advisory, None);
            }
            other => panic!("Expected a question view, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn advisory_shows_on_the_next_question_exactly_once() {
        let fixture = Fixture::new();
        let id = fixture.started().await;
        fixture.submit(id, RawAnswer::Empty).await;
        fixture.submit(id, RawAnswer::Text("Over 7,000".to_string())).await;

        match fixture.view(id).await {
            CurrentQuestionView::Question { question, advisory } => {
                assert_eq!(question.step, Step::Q2);
                assert_eq!(advisory, Some(LARGE_ORG_ADVISORY));
            }
            other => panic!("Expected a question view, got {:?}", other),
        }

        // A second render of the same step no longer carries it.
        match fixture.view(id).await {
            CurrentQuestionView::Question { advisory, .. } => assert_eq!(advisory, None),
            other => panic!("Expected a question view, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let fixture = Fixture::new();
        let err = fixture
            .question
            .handle(GetCurrentQuestionQuery {
                assessment_id: AssessmentId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }
}
