//! Question definitions and per-question input validation.

use serde::Serialize;

use crate::domain::foundation::{ScaleRating, ValidationError};

use super::answer::{AnswerValue, RawAnswer};
use super::Step;

/// Input constraints for a question, by input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputSpec {
    /// Exactly one of the listed options.
    SingleChoice { options: &'static [&'static str] },
    /// Any subset of the listed options, optionally capped.
    MultiChoice {
        options: &'static [&'static str],
        max_selections: Option<usize>,
    },
    /// An integer in `[min, max]`.
    NumericScale { min: u8, max: u8 },
    /// Unconstrained text, may be empty.
    FreeText,
}

/// A static questionnaire entry.
///
/// Questions are defined once at startup and never change; the catalog in
/// [`super::catalog`] holds the full set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub step: Step,
    pub prompt: &'static str,
    pub input: InputSpec,
}

impl Question {
    /// Returns the listed options (empty for scale and free-text inputs).
    pub fn options(&self) -> &'static [&'static str] {
        match self.input {
            InputSpec::SingleChoice { options } | InputSpec::MultiChoice { options, .. } => options,
            InputSpec::NumericScale { .. } | InputSpec::FreeText => &[],
        }
    }

    /// Validates a raw submission against this question's input spec.
    ///
    /// # Errors
    ///
    /// - `NotAnOption` for a single-choice value outside the option list
    /// - `NotASubset` for a multi-choice selection outside the option list
    /// - `TooManySelections` when a capped multi-choice exceeds its cap
    ///   (the whole submission is rejected, nothing is recorded)
    /// - `OutOfRange` for a numeric-scale value outside `[min, max]`
    /// - `UnexpectedKind` when the value shape does not fit the input kind
    pub fn validate(&self, raw: &RawAnswer) -> Result<AnswerValue, ValidationError> {
        let step = self.step.key();
        match (self.input, raw) {
            (InputSpec::SingleChoice { options }, RawAnswer::Text(value)) => {
                if options.contains(&value.as_str()) {
                    Ok(AnswerValue::Choice(value.clone()))
                } else {
                    Err(ValidationError::NotAnOption {
                        step,
                        value: value.clone(),
                    })
                }
            }
            (InputSpec::SingleChoice { .. }, _) => Err(ValidationError::UnexpectedKind {
                step,
                expected: "a single-choice option",
            }),

            (
                InputSpec::MultiChoice {
                    options,
                    max_selections,
                },
                RawAnswer::Selections(values),
            ) => {
                let mut picked: Vec<String> = Vec::with_capacity(values.len());
                for value in values {
                    if !options.contains(&value.as_str()) {
                        return Err(ValidationError::NotASubset {
                            step,
                            value: value.clone(),
                        });
                    }
                    if !picked.contains(value) {
                        picked.push(value.clone());
                    }
                }
                if let Some(max) = max_selections {
                    if picked.len() > max {
                        return Err(ValidationError::TooManySelections {
                            step,
                            max,
                            actual: picked.len(),
                        });
                    }
                }
                Ok(AnswerValue::Selections(picked))
            }
            (InputSpec::MultiChoice { .. }, _) => Err(ValidationError::UnexpectedKind {
                step,
                expected: "a multi-choice selection list",
            }),

            (InputSpec::NumericScale { .. }, RawAnswer::Scale(value)) => {
                Ok(AnswerValue::Scale(ScaleRating::try_from_i64(step, *value)?))
            }
            (InputSpec::NumericScale { .. }, _) => Err(ValidationError::UnexpectedKind {
                step,
                expected: "a numeric-scale integer",
            }),

            (InputSpec::FreeText, RawAnswer::Text(value)) => Ok(AnswerValue::Text(value.clone())),
            (InputSpec::FreeText, RawAnswer::Empty) => Ok(AnswerValue::Text(String::new())),
            (InputSpec::FreeText, _) => Err(ValidationError::UnexpectedKind {
                step,
                expected: "a free-text string",
            }),
        }
    }
}
