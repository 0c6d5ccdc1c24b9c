//! Maturity scoring: category normalization, overall score, risk level.

use serde::{Deserialize, Serialize};

use crate::domain::survey::{AnswerSet, Step};

use super::matching;
use super::points::{
    scale_score, DelayFrequency, EthicsImpact, PilotIssues, RoiOutcome, StrategyStatus,
    TalentChallenge, TrainedHeadcount, TrainingBudget, WorkflowFit,
};

/// Maximum attainable raw sum for the three-question categories.
const TRIAD_MAX_RAW: f64 = 9.0;

/// Maximum attainable raw sum for the two-question ROI category.
const ROI_MAX_RAW: f64 = 6.0;

/// Top of the normalized per-category scale.
pub const SCALE_TOP: f64 = 10.0;

/// Risk classification derived from the overall maturity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Classifies an overall score; both band boundaries are inclusive on
    /// the lower side (3.0 is still High, 6.0 is still Medium).
    pub fn from_overall(overall: f64) -> Self {
        if overall <= 3.0 {
            RiskLevel::High
        } else if overall <= 6.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk (Low Maturity)",
            RiskLevel::Medium => "Medium Risk (Moderate Maturity)",
            RiskLevel::Low => "Low Risk (High Maturity)",
        }
    }
}

/// The computed assessment result.
///
/// # Invariants
///
/// - Every category score and the overall score lie in `[0, 10]`.
/// - A pure function of the answer set: identical answers always produce
///   an identical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub organizational: f64,
    pub talent: f64,
    pub technical: f64,
    pub roi: f64,
    pub overall: f64,
    pub risk: RiskLevel,
    pub recommendations: Vec<String>,
}

impl ScoreReport {
    /// Returns (display name, score) pairs in presentation order.
    pub fn categories(&self) -> [(&'static str, f64); 4] {
        [
            ("Organizational", self.organizational),
            ("Talent", self.talent),
            ("Technical", self.technical),
            ("ROI", self.roi),
        ]
    }
}

/// Calculator turning a completed answer set into a [`ScoreReport`].
pub struct MaturityScorer;

impl MaturityScorer {
    /// Scores an answer set.
    ///
    /// Missing or unrecognized answers contribute zero raw points; the
    /// function never fails, even on an empty set.
    pub fn score(answers: &AnswerSet) -> ScoreReport {
        let organizational = normalize(
            StrategyStatus::score(answers)
                + scale_score(answers, Step::Q4)
                + DelayFrequency::score(answers),
            TRIAD_MAX_RAW,
        );

        let talent = normalize(
            TrainedHeadcount::score(answers)
                + TalentChallenge::score(answers)
                + TrainingBudget::score(answers),
            TRIAD_MAX_RAW,
        );

        let technical = normalize(
            PilotIssues::score(answers)
                + scale_score(answers, Step::Q10)
                + EthicsImpact::score(answers),
            TRIAD_MAX_RAW,
        );

        let roi = normalize(
            RoiOutcome::score(answers) + WorkflowFit::score(answers),
            ROI_MAX_RAW,
        );

        let overall = (organizational + talent + technical + roi) / 4.0;

        ScoreReport {
            organizational,
            talent,
            technical,
            roi,
            overall,
            risk: RiskLevel::from_overall(overall),
            recommendations: matching::match_tools(answers),
        }
    }
}

fn normalize(raw: f64, max_raw: f64) -> f64 {
    (raw / max_raw) * SCALE_TOP
}
