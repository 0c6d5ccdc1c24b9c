//! GetReportHandler - scores a completed assessment.

use std::sync::Arc;

use crate::domain::foundation::{AssessmentId, DomainError};
use crate::domain::scoring::{summary, MaturityScorer, ScoreReport};
use crate::ports::SessionStore;

/// Query for a completed assessment's report.
#[derive(Debug, Clone)]
pub struct GetReportQuery {
    pub assessment_id: AssessmentId,
}

/// The computed report plus its plain-text summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub report: ScoreReport,
    pub summary_lines: Vec<String>,
}

/// Handler for the report query.
pub struct GetReportHandler {
    store: Arc<dyn SessionStore>,
}

impl GetReportHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Scores the accumulated answers of a completed session.
    ///
    /// Scoring is pure, so repeated queries return the identical report.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` for an unknown assessment id
    /// - `AssessmentNotComplete` while the flow has not reached `results`
    pub async fn handle(&self, query: GetReportQuery) -> Result<ReportView, DomainError> {
        let state = self
            .store
            .get(&query.assessment_id)
            .await?
            .ok_or_else(|| DomainError::session_not_found(&query.assessment_id))?;

        if !state.is_complete() {
            return Err(DomainError::assessment_not_complete(state.step().key()));
        }

        let report = MaturityScorer::score(state.answers());
        let summary_lines = summary::render_lines(&report);

        tracing::info!(
            assessment_id = %query.assessment_id,
            overall = report.overall,
            risk = ?report.risk,
            "report computed"
        );

        Ok(ReportView { report, summary_lines })
    }
}
