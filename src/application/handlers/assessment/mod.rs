//! Assessment handlers - the operations the rendering surface drives.
//!
//! Strictly synchronous request/response per session: the surface asks for
//! the current question, submits a value, and repeats until the terminal
//! step, then fetches the report once.

mod get_current_question;
mod get_report;
mod start_assessment;
mod submit_answer;

pub use get_current_question::{
    CurrentQuestionView, GetCurrentQuestionHandler, GetCurrentQuestionQuery, WELCOME_LINES,
};
pub use get_report::{GetReportHandler, GetReportQuery, ReportView};
pub use start_assessment::{StartAssessmentHandler, StartAssessmentResult};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};
