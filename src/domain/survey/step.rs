//! Step enum representing the questionnaire state graph.
//!
//! The graph is {start} ∪ {q1..q16} ∪ {q3_follow, q6_follow, q9_follow} ∪
//! {results}. `start` is the initial state and `results` is terminal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A state in the questionnaire graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Start,
    Q1,
    Q2,
    Q3,
    Q3Follow,
    Q4,
    Q5,
    Q6,
    Q6Follow,
    Q7,
    Q8,
    Q9,
    Q9Follow,
    Q10,
    Q11,
    Q12,
    Q13,
    Q14,
    Q15,
    Q16,
    Results,
}

impl Step {
    /// Returns all steps, main-line questions in presentation order with
    /// each follow-up directly after its parent.
    pub fn all() -> &'static [Step] {
        &[
            Step::Start,
            Step::Q1,
            Step::Q2,
            Step::Q3,
            Step::Q3Follow,
            Step::Q4,
            Step::Q5,
            Step::Q6,
            Step::Q6Follow,
            Step::Q7,
            Step::Q8,
            Step::Q9,
            Step::Q9Follow,
            Step::Q10,
            Step::Q11,
            Step::Q12,
            Step::Q13,
            Step::Q14,
            Step::Q15,
            Step::Q16,
            Step::Results,
        ]
    }

    /// Returns the stable string key for this step (used in APIs and logs).
    pub fn key(&self) -> &'static str {
        match self {
            Step::Start => "start",
            Step::Q1 => "q1",
            Step::Q2 => "q2",
            Step::Q3 => "q3",
            Step::Q3Follow => "q3_follow",
            Step::Q4 => "q4",
            Step::Q5 => "q5",
            Step::Q6 => "q6",
            Step::Q6Follow => "q6_follow",
            Step::Q7 => "q7",
            Step::Q8 => "q8",
            Step::Q9 => "q9",
            Step::Q9Follow => "q9_follow",
            Step::Q10 => "q10",
            Step::Q11 => "q11",
            Step::Q12 => "q12",
            Step::Q13 => "q13",
            Step::Q14 => "q14",
            Step::Q15 => "q15",
            Step::Q16 => "q16",
            Step::Results => "results",
        }
    }

    /// Looks a step up by its string key.
    pub fn from_key(key: &str) -> Option<Step> {
        Step::all().iter().copied().find(|s| s.key() == key)
    }

    /// Returns true if this step displays a question.
    ///
    /// `start` and `results` are synthetic steps without catalog entries.
    pub fn is_question(&self) -> bool {
        !matches!(self, Step::Start | Step::Results)
    }

    /// Returns true if this is the terminal step.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Results)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
