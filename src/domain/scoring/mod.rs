//! Scoring module - pure maturity scoring and tool matching.
//!
//! Everything here is a pure function over an [`AnswerSet`]: category
//! normalization, risk classification, rule-based tool recommendations,
//! and the plain-text summary. No state, no I/O.
//!
//! [`AnswerSet`]: crate::domain::survey::AnswerSet

pub mod matching;
pub mod points;
pub mod report;
pub mod summary;

pub use matching::{match_tools, ToolRule, NO_MATCH_MESSAGE, TOOL_RULES};
pub use report::{MaturityScorer, RiskLevel, ScoreReport};
