//! Survey module - the question catalog and the flow engine.
//!
//! The questionnaire is a fixed, forward-only sequence of 16 questions with
//! three conditional follow-ups. [`FlowState`] holds one respondent's
//! progress; [`catalog`] holds the immutable question definitions; the
//! transition table in [`flow`] decides what comes next.

pub mod answer;
pub mod catalog;
pub mod flow;
mod question;
mod step;

pub use answer::{AnswerSet, AnswerValue, RawAnswer};
pub use catalog::{question_for, GOAL_SELECTION_CAP, LARGE_ORG_ADVISORY};
pub use flow::{startup_check, FlowState, Transition, TransitionRule, TRANSITIONS};
pub use question::{InputSpec, Question};
pub use step::Step;
