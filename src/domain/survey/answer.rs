//! Answer values and the accumulated answer set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::ScaleRating;

use super::Step;

/// A value as submitted by the rendering surface, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    /// No value (the Start button, or an intentionally blank free-text).
    Empty,
    /// An integer for numeric-scale questions.
    Scale(i64),
    /// A set of picked options for multi-choice questions.
    Selections(Vec<String>),
    /// A single string: the picked option or free text.
    Text(String),
}

impl RawAnswer {
    /// Returns a short name for the value shape (used in error messages).
    pub fn kind(&self) -> &'static str {
        match self {
            RawAnswer::Empty => "empty",
            RawAnswer::Scale(_) => "integer",
            RawAnswer::Selections(_) => "selection list",
            RawAnswer::Text(_) => "text",
        }
    }
}

/// A validated answer as recorded in the answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    Choice(String),
    Selections(Vec<String>),
    Scale(ScaleRating),
    Text(String),
}

/// Accumulated respondent answers keyed by step.
///
/// # Invariants
///
/// - Grows monotonically: the flow engine records each step at most once
///   (forward-only protocol, no revisiting).
/// - Iteration order is deterministic (ordered by step).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<Step, AnswerValue>);

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records an answer for a step.
    pub fn record(&mut self, step: Step, value: AnswerValue) {
        self.0.insert(step, value);
    }

    /// Returns the answer for a step, if recorded.
    pub fn get(&self, step: Step) -> Option<&AnswerValue> {
        self.0.get(&step)
    }

    /// Returns true if the step has a recorded answer.
    pub fn contains(&self, step: Step) -> bool {
        self.0.contains_key(&step)
    }

    /// Returns the single-choice answer for a step, if it is one.
    pub fn choice(&self, step: Step) -> Option<&str> {
        match self.0.get(&step) {
            Some(AnswerValue::Choice(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the multi-choice selections for a step, if they are some.
    pub fn selections(&self, step: Step) -> Option<&[String]> {
        match self.0.get(&step) {
            Some(AnswerValue::Selections(v)) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Returns the scale rating for a step, if it is one.
    pub fn scale(&self, step: Step) -> Option<ScaleRating> {
        match self.0.get(&step) {
            Some(AnswerValue::Scale(r)) => Some(*r),
            _ => None,
        }
    }

    /// Returns the number of recorded answers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no answers have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
