//! The survey flow engine.
//!
//! A forward-only state machine over [`Step`]: the transition table below is
//! the single source of truth for question order and conditional follow-ups.
//! Branching is expressed as data, never as error handling, and the table is
//! validated once at startup by [`validate_graph`].

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp, ValidationError};

use super::answer::{AnswerSet, RawAnswer};
use super::catalog::{self, question_for, LARGE_ORG_ADVISORY};
use super::question::{InputSpec, Question};
use super::Step;

/// Employee-count answer that arms the one-shot advisory.
const ADVISORY_TRIGGER: &str = "Over 7,000";

/// How a step decides its successor after its answer is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRule {
    /// Unconditional successor.
    Always(Step),
    /// Follow-up branch: `then` when the just-recorded single-choice answer
    /// is one of `answers`, `otherwise` for every other answer.
    BranchOn {
        answers: &'static [&'static str],
        then: Step,
        otherwise: Step,
    },
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Step,
    pub rule: TransitionRule,
}

/// The full transition table. Every non-terminal step has exactly one row;
/// `results` has none.
pub static TRANSITIONS: &[Transition] = &[
    Transition { from: Step::Start, rule: TransitionRule::Always(Step::Q1) },
    Transition { from: Step::Q1, rule: TransitionRule::Always(Step::Q2) },
    Transition { from: Step::Q2, rule: TransitionRule::Always(Step::Q3) },
    Transition {
        from: Step::Q3,
        rule: TransitionRule::BranchOn {
            answers: &["No, but we're exploring", "No"],
            then: Step::Q3Follow,
            otherwise: Step::Q4,
        },
    },
    Transition { from: Step::Q3Follow, rule: TransitionRule::Always(Step::Q4) },
    Transition { from: Step::Q4, rule: TransitionRule::Always(Step::Q5) },
    Transition { from: Step::Q5, rule: TransitionRule::Always(Step::Q6) },
    Transition {
        from: Step::Q6,
        rule: TransitionRule::BranchOn {
            answers: &["None", "1-10"],
            then: Step::Q6Follow,
            otherwise: Step::Q7,
        },
    },
    Transition { from: Step::Q6Follow, rule: TransitionRule::Always(Step::Q7) },
    Transition { from: Step::Q7, rule: TransitionRule::Always(Step::Q8) },
    Transition { from: Step::Q8, rule: TransitionRule::Always(Step::Q9) },
    Transition {
        from: Step::Q9,
        rule: TransitionRule::BranchOn {
            answers: &["Yes, frequently"],
            then: Step::Q9Follow,
            otherwise: Step::Q10,
        },
    },
    Transition { from: Step::Q9Follow, rule: TransitionRule::Always(Step::Q10) },
    Transition { from: Step::Q10, rule: TransitionRule::Always(Step::Q11) },
    Transition { from: Step::Q11, rule: TransitionRule::Always(Step::Q12) },
    Transition { from: Step::Q12, rule: TransitionRule::Always(Step::Q13) },
    Transition { from: Step::Q13, rule: TransitionRule::Always(Step::Q14) },
    Transition { from: Step::Q14, rule: TransitionRule::Always(Step::Q15) },
    Transition { from: Step::Q15, rule: TransitionRule::Always(Step::Q16) },
    Transition { from: Step::Q16, rule: TransitionRule::Always(Step::Results) },
];

/// Returns the transition row for a step, if one exists.
pub fn transition_for(step: Step) -> Option<&'static Transition> {
    TRANSITIONS.iter().find(|t| t.from == step)
}

/// Computes the successor of `step` given the recorded answers.
///
/// # Errors
///
/// - `UnknownStep` if the table has no row for a non-terminal step
///   (a configuration defect [`validate_graph`] rules out at startup)
fn advance(step: Step, answers: &AnswerSet) -> Result<Step, DomainError> {
    let transition = transition_for(step)
        .ok_or_else(|| DomainError::unknown_step(format!("No transition out of {}", step)))?;

    Ok(match transition.rule {
        TransitionRule::Always(next) => next,
        TransitionRule::BranchOn {
            answers: triggers,
            then,
            otherwise,
        } => match answers.choice(step) {
            Some(choice) if triggers.contains(&choice) => then,
            _ => otherwise,
        },
    })
}

/// Validates the transition table against the step graph and catalog.
///
/// Run once at startup, alongside [`catalog::self_check`].
///
/// # Errors
///
/// - `UnknownStep` if a non-terminal step lacks a row or has several, the
///   terminal step has one, a branch is declared on a non-single-choice
///   question, a branch trigger is not a listed option, or some step is
///   unreachable from `start`
pub fn validate_graph() -> Result<(), DomainError> {
    for step in Step::all() {
        let rows = TRANSITIONS.iter().filter(|t| t.from == *step).count();
        match (step.is_terminal(), rows) {
            (true, 0) | (false, 1) => {}
            (true, _) => {
                return Err(DomainError::unknown_step(format!(
                    "Terminal step {} must have no outgoing transition",
                    step
                )));
            }
            (false, n) => {
                return Err(DomainError::unknown_step(format!(
                    "Step {} has {} transition rows, expected exactly 1",
                    step, n
                )));
            }
        }
    }

    for transition in TRANSITIONS {
        if let TransitionRule::BranchOn { answers, .. } = transition.rule {
            let options = match question_for(transition.from).map(|q| q.input) {
                Some(InputSpec::SingleChoice { options }) => options,
                _ => {
                    return Err(DomainError::unknown_step(format!(
                        "Branch declared on {}, which is not a single-choice question",
                        transition.from
                    )));
                }
            };
            for trigger in answers {
                if !options.contains(trigger) {
                    return Err(DomainError::unknown_step(format!(
                        "Branch trigger '{}' is not an option of {}",
                        trigger, transition.from
                    )));
                }
            }
        }
    }

    // Every step must be reachable by walking the table from `start`.
    let mut reached = vec![Step::Start];
    let mut frontier = vec![Step::Start];
    while let Some(step) = frontier.pop() {
        if let Some(transition) = transition_for(step) {
            let (first, second) = match transition.rule {
                TransitionRule::Always(next) => (next, None),
                TransitionRule::BranchOn { then, otherwise, .. } => (then, Some(otherwise)),
            };
            for target in std::iter::once(first).chain(second) {
                if !reached.contains(&target) {
                    reached.push(target);
                    frontier.push(target);
                }
            }
        }
    }
    for step in Step::all() {
        if !reached.contains(step) {
            return Err(DomainError::unknown_step(format!(
                "Step {} is unreachable from start",
                step
            )));
        }
    }

    Ok(())
}

/// Runs every startup self-check: catalog consistency and graph validity.
pub fn startup_check() -> Result<(), DomainError> {
    catalog::self_check()?;
    validate_graph()
}

/// Per-session flow state: current step, accumulated answers, and the
/// one-shot advisory flag.
///
/// # Lifecycle
///
/// Created at `start` with an empty answer set, advanced monotonically by
/// [`FlowState::submit`], finished at `results`. Never persisted across
/// sessions; an abandoned session is simply dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowState {
    step: Step,
    answers: AnswerSet,
    advisory_pending: bool,
    started_at: Timestamp,
}

impl FlowState {
    /// Creates a fresh flow at the `start` step.
    pub fn new() -> Self {
        Self {
            step: Step::Start,
            answers: AnswerSet::new(),
            advisory_pending: false,
            started_at: Timestamp::now(),
        }
    }

    /// Returns the current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Returns the accumulated answers.
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Returns when this flow was started.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns true once the terminal step is reached.
    pub fn is_complete(&self) -> bool {
        self.step.is_terminal()
    }

    /// Returns the question for the current step, or `None` on synthetic
    /// steps (`start`, `results`).
    pub fn current_question(&self) -> Option<&'static Question> {
        question_for(self.step)
    }

    /// Takes the pending advisory, clearing it.
    ///
    /// The rendering surface calls this while displaying the question that
    /// follows the triggering answer; the advisory is surfaced exactly once
    /// per session.
    pub fn take_advisory(&mut self) -> Option<&'static str> {
        if self.advisory_pending {
            self.advisory_pending = false;
            Some(LARGE_ORG_ADVISORY)
        } else {
            None
        }
    }

    /// Returns true if an advisory is waiting to be displayed.
    pub fn advisory_pending(&self) -> bool {
        self.advisory_pending
    }

    /// Validates and records a submission for the current step, then
    /// advances. Returns the new current step.
    ///
    /// The `start` step accepts only an empty submission (the Start button).
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when the value fails the current question's
    ///   constraints; nothing is recorded and the step does not move
    /// - `AssessmentComplete` when submitting at `results`
    pub fn submit(&mut self, raw: &RawAnswer) -> Result<Step, DomainError> {
        if self.is_complete() {
            return Err(DomainError::assessment_complete());
        }

        if self.step == Step::Start {
            if !matches!(raw, RawAnswer::Empty) {
                return Err(ValidationError::UnexpectedKind {
                    step: Step::Start.key(),
                    expected: "an empty submission",
                }
                .into());
            }
        } else {
            let question = self
                .current_question()
                .ok_or_else(|| DomainError::unknown_step(format!("No question for {}", self.step)))?;
            let value = question.validate(raw)?;

            if self.step == Step::Q1 {
                if let super::answer::AnswerValue::Choice(choice) = &value {
                    if choice == ADVISORY_TRIGGER {
                        self.advisory_pending = true;
                    }
                }
            }

            self.answers.record(self.step, value);
        }

        self.step = advance(self.step, &self.answers)?;
        tracing::debug!(step = %self.step, answered = self.answers.len(), "flow advanced");
        Ok(self.step)
    }
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new()
    }
}
