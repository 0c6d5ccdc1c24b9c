//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the JSON API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::assessment::{CurrentQuestionView, ReportView};
use crate::domain::foundation::DomainError;
use crate::domain::survey::{InputSpec, Question, RawAnswer};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for answer submissions.
///
/// `value` may be an option string, a selection list, an integer, or null
/// (the Start button and blank free-text answers).
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    pub value: Option<RawAnswer>,
}

impl SubmitAnswerRequest {
    /// Converts the optional payload into a domain raw answer.
    pub fn into_raw(self) -> RawAnswer {
        self.value.unwrap_or(RawAnswer::Empty)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a newly created assessment.
#[derive(Debug, Clone, Serialize)]
pub struct StartAssessmentResponse {
    pub assessment_id: String,
    pub message: String,
}

/// A question as displayed by the rendering surface.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionBody {
    pub step: String,
    pub prompt: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_min: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

impl QuestionBody {
    fn from_question(question: &Question, advisory: Option<&str>) -> Self {
        let (kind, max_selections, scale_min, scale_max) = match question.input {
            InputSpec::SingleChoice { .. } => ("single_choice", None, None, None),
            InputSpec::MultiChoice { max_selections, .. } => {
                ("multi_choice", max_selections, None, None)
            }
            InputSpec::NumericScale { min, max } => ("numeric_scale", None, Some(min), Some(max)),
            InputSpec::FreeText => ("free_text", None, None, None),
        };

        Self {
            step: question.step.key().to_string(),
            prompt: question.prompt.to_string(),
            kind,
            options: question.options().iter().map(|s| s.to_string()).collect(),
            max_selections,
            scale_min,
            scale_max,
            advisory: advisory.map(|s| s.to_string()),
        }
    }
}

/// What the surface should display for the current step.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum CurrentQuestionResponse {
    Welcome { lines: Vec<String> },
    Question { question: QuestionBody },
    Complete,
}

impl From<CurrentQuestionView> for CurrentQuestionResponse {
    fn from(view: CurrentQuestionView) -> Self {
        match view {
            CurrentQuestionView::Welcome { lines } => CurrentQuestionResponse::Welcome {
                lines: lines.iter().map(|s| s.to_string()).collect(),
            },
            CurrentQuestionView::Question { question, advisory } => {
                CurrentQuestionResponse::Question {
                    question: QuestionBody::from_question(question, advisory),
                }
            }
            CurrentQuestionView::Complete => CurrentQuestionResponse::Complete,
        }
    }
}

/// Response for a recorded submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    pub next_step: String,
    pub complete: bool,
}

/// The scored report with its plain-text summary.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub organizational: f64,
    pub talent: f64,
    pub technical: f64,
    pub roi: f64,
    pub overall: f64,
    pub risk_level: String,
    pub recommendations: Vec<String>,
    pub summary: Vec<String>,
}

impl From<ReportView> for ReportResponse {
    fn from(view: ReportView) -> Self {
        Self {
            organizational: view.report.organizational,
            talent: view.report.talent,
            technical: view.report.technical,
            roi: view.report.roi,
            overall: view.report.overall,
            risk_level: view.report.risk.label().to_string(),
            recommendations: view.report.recommendations,
            summary: view.summary_lines,
        }
    }
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    /// Builds the body for a domain error.
    pub fn from_domain(err: &DomainError) -> Self {
        Self {
            error: err.code.to_string(),
            message: err.message.clone(),
        }
    }

    /// Builds a plain bad-request body.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::{question_for, Step};

    #[test]
    fn submit_request_defaults_to_empty() {
        let req: SubmitAnswerRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.into_raw(), RawAnswer::Empty);

        let req: SubmitAnswerRequest = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(req.into_raw(), RawAnswer::Empty);
    }

    #[test]
    fn submit_request_accepts_every_shape() {
        let req: SubmitAnswerRequest = serde_json::from_str(r#"{"value": "No"}"#).unwrap();
        assert_eq!(req.into_raw(), RawAnswer::Text("No".to_string()));

        let req: SubmitAnswerRequest = serde_json::from_str(r#"{"value": 4}"#).unwrap();
        assert_eq!(req.into_raw(), RawAnswer::Scale(4));

        let req: SubmitAnswerRequest =
            serde_json::from_str(r#"{"value": ["ChatGPT/OpenAI"]}"#).unwrap();
        assert_eq!(
            req.into_raw(),
            RawAnswer::Selections(vec!["ChatGPT/OpenAI".to_string()])
        );
    }

    #[test]
    fn question_body_carries_scale_bounds() {
        let q4 = question_for(Step::Q4).unwrap();
        let body = QuestionBody::from_question(q4, None);
        assert_eq!(body.kind, "numeric_scale");
        assert_eq!(body.scale_min, Some(1));
        assert_eq!(body.scale_max, Some(5));
        assert!(body.options.is_empty());
    }

    #[test]
    fn question_body_carries_selection_cap_and_advisory() {
        let q16 = question_for(Step::Q16).unwrap();
        let body = QuestionBody::from_question(q16, Some("heads up"));
        assert_eq!(body.kind, "multi_choice");
        assert_eq!(body.max_selections, Some(3));
        assert_eq!(body.advisory.as_deref(), Some("heads up"));
    }

    #[test]
    fn current_question_response_is_view_tagged() {
        let json = serde_json::to_string(&CurrentQuestionResponse::Complete).unwrap();
        assert_eq!(json, r#"{"view":"complete"}"#);
    }
}
