//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CurrentQuestionResponse, ErrorResponse, QuestionBody, ReportResponse, StartAssessmentResponse,
    SubmitAnswerRequest, SubmitAnswerResponse,
};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
