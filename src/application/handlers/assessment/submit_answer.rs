//! SubmitAnswerHandler - records a value for the current step and advances.

use std::sync::Arc;

use crate::domain::foundation::{AssessmentId, DomainError};
use crate::domain::survey::{RawAnswer, Step};
use crate::ports::SessionStore;

/// Command carrying one submission from the rendering surface.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub assessment_id: AssessmentId,
    pub value: RawAnswer,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub next_step: Step,
    pub complete: bool,
}

/// Handler for answer submissions.
pub struct SubmitAnswerHandler {
    store: Arc<dyn SessionStore>,
}

impl SubmitAnswerHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Validates, records, and advances the session's flow.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` for an unknown assessment id
    /// - `InvalidInput` when the value fails the current question's
    ///   constraints (the surface should re-prompt; nothing was recorded)
    /// - `AssessmentComplete` when the session is already at `results`
    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<SubmitAnswerResult, DomainError> {
        let mut state = self
            .store
            .get(&cmd.assessment_id)
            .await?
            .ok_or_else(|| DomainError::session_not_found(&cmd.assessment_id))?;

        let next_step = state.submit(&cmd.value)?;
        let complete = state.is_complete();
        self.store.update(&cmd.assessment_id, state).await?;

        if complete {
            tracing::info!(assessment_id = %cmd.assessment_id, "assessment completed");
        }

        Ok(SubmitAnswerResult { next_step, complete })
    }
}
