//! StartAssessmentHandler - creates a fresh assessment session.

use std::sync::Arc;

use crate::domain::foundation::{AssessmentId, DomainError};
use crate::domain::survey::FlowState;
use crate::ports::SessionStore;

/// Result of starting an assessment.
#[derive(Debug, Clone)]
pub struct StartAssessmentResult {
    pub assessment_id: AssessmentId,
}

/// Handler for creating assessments.
pub struct StartAssessmentHandler {
    store: Arc<dyn SessionStore>,
}

impl StartAssessmentHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<StartAssessmentResult, DomainError> {
        let assessment_id = AssessmentId::new();
        self.store.insert(assessment_id, FlowState::new()).await?;

        tracing::info!(%assessment_id, "assessment started");
        Ok(StartAssessmentResult { assessment_id })
    }
}
