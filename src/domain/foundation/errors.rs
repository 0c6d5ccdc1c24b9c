//! Error types for the domain layer.

use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors raised while validating a submitted answer value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("'{value}' is not an option for {step}")]
    NotAnOption { step: &'static str, value: String },

    #[error("'{value}' is not among the listed options for {step}")]
    NotASubset { step: &'static str, value: String },

    #[error("{step} accepts at most {max} selections, got {actual}")]
    TooManySelections {
        step: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{step} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        step: &'static str,
        min: u8,
        max: u8,
        actual: i64,
    },

    #[error("{step} expects {expected}")]
    UnexpectedKind {
        step: &'static str,
        expected: &'static str,
    },
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    InvalidInput,

    // Not found errors
    SessionNotFound,

    // State errors
    AssessmentComplete,
    AssessmentNotComplete,

    // Configuration errors
    UnknownStep,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::AssessmentComplete => "ASSESSMENT_COMPLETE",
            ErrorCode::AssessmentNotComplete => "ASSESSMENT_NOT_COMPLETE",
            ErrorCode::UnknownStep => "UNKNOWN_STEP",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a session-not-found error.
    pub fn session_not_found(id: impl fmt::Display) -> Self {
        Self::new(ErrorCode::SessionNotFound, format!("No assessment session with id {}", id))
    }

    /// Creates an error for submissions arriving after the terminal step.
    pub fn assessment_complete() -> Self {
        Self::new(
            ErrorCode::AssessmentComplete,
            "Assessment is complete; no further answers are accepted",
        )
    }

    /// Creates an error for report requests before the terminal step.
    pub fn assessment_not_complete(step: &'static str) -> Self {
        Self::new(
            ErrorCode::AssessmentNotComplete,
            format!("Assessment is still at {}; the report is only available once complete", step),
        )
    }

    /// Creates a fatal configuration error for an inconsistent step graph.
    pub fn unknown_step(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnknownStep, detail)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorCode::InvalidInput, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_not_an_option_displays_correctly() {
        let err = ValidationError::NotAnOption {
            step: "q3",
            value: "Definitely".to_string(),
        };
        assert_eq!(format!("{}", err), "'Definitely' is not an option for q3");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::OutOfRange {
            step: "q4",
            min: 1,
            max: 5,
            actual: 9,
        };
        assert_eq!(format!("{}", err), "q4 must be between 1 and 5, got 9");
    }

    #[test]
    fn validation_error_too_many_selections_displays_correctly() {
        let err = ValidationError::TooManySelections {
            step: "q16",
            max: 3,
            actual: 4,
        };
        assert_eq!(format!("{}", err), "q16 accepts at most 3 selections, got 4");
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::SessionNotFound, "Session not found");
        assert_eq!(format!("{}", err), "[SESSION_NOT_FOUND] Session not found");
    }

    #[test]
    fn validation_error_converts_to_invalid_input() {
        let err: DomainError = ValidationError::UnexpectedKind {
            step: "q4",
            expected: "numeric-scale",
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("numeric-scale"));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::AssessmentNotComplete), "ASSESSMENT_NOT_COMPLETE");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
