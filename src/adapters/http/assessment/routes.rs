//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_current_question, get_report, start_assessment, submit_answer, AssessmentHandlers,
};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(start_assessment))
        .route("/:id/question", get(get_current_question))
        .route("/:id/answer", post(submit_answer))
        .route("/:id/report", get(get_report))
        .with_state(handlers)
}
