//! Per-question point tables.
//!
//! Each scored question gets an exhaustive enum over its option set, parsed
//! from the option label the respondent saw. A missing or unrecognized
//! answer contributes zero points (lookup-with-default, never an error), so
//! scoring degrades gracefully over partial answer sets.

use crate::domain::foundation::ScaleRating;
use crate::domain::survey::{AnswerSet, Step};

/// Defines an option enum with its label parsing and raw point values.
macro_rules! points_table {
    (
        $(#[$meta:meta])*
        $name:ident at $step:expr;
        $($variant:ident => ($label:literal, $points:literal)),+ $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Parses the option label shown to the respondent.
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Raw points contributed before category normalization.
            pub fn points(&self) -> f64 {
                match self {
                    $(Self::$variant => $points,)+
                }
            }

            /// Points for this question out of an answer set; zero when the
            /// answer is missing or unrecognized.
            pub fn score(answers: &AnswerSet) -> f64 {
                answers
                    .choice($step)
                    .and_then(Self::from_label)
                    .map_or(0.0, |v| v.points())
            }
        }
    };
}

points_table! {
    /// q3 - formal AI strategy.
    StrategyStatus at Step::Q3;
    FullyDocumented => ("Yes, fully documented and implemented", 3.0),
    Partial => ("Partial (e.g., in planning)", 2.0),
    Exploring => ("No, but we're exploring", 1.0),
    None => ("No", 0.0),
}

points_table! {
    /// q5 - how often bureaucracy delays experiments.
    DelayFrequency at Step::Q5;
    Rarely => ("Rarely", 3.0),
    Sometimes => ("Sometimes", 2.0),
    Often => ("Often", 1.0),
    Always => ("Always", 0.0),
}

points_table! {
    /// q6 - team members trained in AI tooling.
    TrainedHeadcount at Step::Q6;
    None => ("None", 0.0),
    OneToTen => ("1-10", 1.0),
    ElevenToFifty => ("11-50", 2.0),
    MoreThanFifty => ("More than 50", 3.0),
    Unsure => ("Unsure", 0.0),
}

points_table! {
    /// q7 - difficulty finding AI-skilled talent.
    TalentChallenge at Step::Q7;
    MajorIssue => ("Yes, major issue", 1.0),
    Somewhat => ("Somewhat", 2.0),
    No => ("No", 3.0),
}

points_table! {
    /// q8 - annual AI training budget share.
    TrainingBudget at Step::Q8;
    LessThanFivePercent => ("Less than 5%", 1.0),
    FiveToTenPercent => ("5-10%", 2.0),
    OverTenPercent => ("Over 10%", 3.0),
    None => ("None", 0.0),
    Unsure => ("Unsure", 0.0),
}

points_table! {
    /// q9 - pilot issues such as inaccurate outputs.
    PilotIssues at Step::Q9;
    Frequently => ("Yes, frequently", 1.0),
    Occasionally => ("Occasionally", 2.0),
    NotYet => ("No, not yet", 3.0),
    NotPiloted => ("Haven't piloted", 0.0),
}

points_table! {
    /// q11 - ethical concerns impacting adoption.
    EthicsImpact at Step::Q11;
    Current => ("Current impact", 1.0),
    Future => ("Future impact", 2.0),
    Neither => ("Neither", 3.0),
    Both => ("Both", 1.0),
}

points_table! {
    /// q12 - measurable ROI from pilots.
    RoiOutcome at Step::Q12;
    Significant => ("Yes, significant", 3.0),
    Some => ("Some", 2.0),
    MinimalOrNone => ("Minimal or none", 1.0),
    NotMeasured => ("Haven't measured", 0.0),
}

points_table! {
    /// q13 - fit of generic tools to specific workflows.
    WorkflowFit at Step::Q13;
    VeryWell => ("Very well", 3.0),
    Adequately => ("Adequately", 2.0),
    Poorly => ("Poorly", 1.0),
    NotSure => ("Not sure", 0.0),
}

/// Point table for the 1-5 scale questions (q4 resistance, q10 readiness).
///
/// The half-point ramp increases with the rating for both questions,
/// including q4 where a higher rating means more resistance. The direction
/// is part of the scoring contract; do not flip it.
pub fn scale_table(rating: ScaleRating) -> f64 {
    match rating {
        ScaleRating::One => 1.0,
        ScaleRating::Two => 1.5,
        ScaleRating::Three => 2.0,
        ScaleRating::Four => 2.5,
        ScaleRating::Five => 3.0,
    }
}

/// Points for a scale question out of an answer set; zero when unanswered.
pub fn scale_score(answers: &AnswerSet, step: Step) -> f64 {
    answers.scale(step).map_or(0.0, scale_table)
}
