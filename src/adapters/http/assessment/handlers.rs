//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assessment::{
    GetCurrentQuestionHandler, GetCurrentQuestionQuery, GetReportHandler, GetReportQuery,
    StartAssessmentHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::SessionStore;

use super::dto::{
    CurrentQuestionResponse, ErrorResponse, ReportResponse, StartAssessmentResponse,
    SubmitAnswerRequest, SubmitAnswerResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    start_handler: Arc<StartAssessmentHandler>,
    question_handler: Arc<GetCurrentQuestionHandler>,
    submit_handler: Arc<SubmitAnswerHandler>,
    report_handler: Arc<GetReportHandler>,
}

impl AssessmentHandlers {
    /// Wires every assessment handler onto one session store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            start_handler: Arc::new(StartAssessmentHandler::new(store.clone())),
            question_handler: Arc::new(GetCurrentQuestionHandler::new(store.clone())),
            submit_handler: Arc::new(SubmitAnswerHandler::new(store.clone())),
            report_handler: Arc::new(GetReportHandler::new(store)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Start a new assessment
pub async fn start_assessment(State(handlers): State<AssessmentHandlers>) -> Response {
    match handlers.start_handler.handle().await {
        Ok(result) => {
            let response = StartAssessmentResponse {
                assessment_id: result.assessment_id.to_string(),
                message: "Assessment started".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/:id/question - Current display state
pub async fn get_current_question(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetCurrentQuestionQuery { assessment_id };
    match handlers.question_handler.handle(query).await {
        Ok(view) => {
            let response: CurrentQuestionResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessments/:id/answer - Submit a value for the current step
pub async fn submit_answer(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Response {
    let assessment_id = match parse_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitAnswerCommand {
        assessment_id,
        value: req.into_raw(),
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = SubmitAnswerResponse {
                next_step: result.next_step.key().to_string(),
                complete: result.complete,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/:id/report - Score a completed assessment
pub async fn get_report(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetReportQuery { assessment_id };
    match handlers.report_handler.handle(query).await {
        Ok(view) => {
            let response: ReportResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error mapping
// ════════════════════════════════════════════════════════════════════════════

fn parse_id(raw: &str) -> Result<AssessmentId, Response> {
    raw.parse::<AssessmentId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid assessment ID")),
        )
            .into_response()
    })
}

fn handle_assessment_error(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::AssessmentComplete | ErrorCode::AssessmentNotComplete => StatusCode::CONFLICT,
        ErrorCode::UnknownStep | ErrorCode::InternalError => {
            tracing::error!(error = %err, "internal assessment error");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::from_domain(&err))).into_response()
}
