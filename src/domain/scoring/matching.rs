//! Tool matching - rule-based recommendations from the multi-select answers.
//!
//! Rules are plain data evaluated in order against the q14 (core systems),
//! q15 (AI tools in use), and q16 (goals) selections. Every matching rule
//! emits its message; appending a new rule never touches engine logic.

use crate::domain::survey::{AnswerSet, Step};

/// Fallback emitted when no rule matches.
pub const NO_MATCH_MESSAGE: &str =
    "No strong matches found. Consider exploring more tools.";

/// A single recommendation rule: the listed entries must all be present in
/// the corresponding selections for the message to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolRule {
    pub systems: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub goals: &'static [&'static str],
    pub message: &'static str,
}

impl ToolRule {
    /// Returns true if every required entry is selected.
    ///
    /// A question with no recorded selections never satisfies a non-empty
    /// requirement.
    pub fn matches(&self, answers: &AnswerSet) -> bool {
        contains_all(answers, Step::Q14, self.systems)
            && contains_all(answers, Step::Q15, self.tools)
            && contains_all(answers, Step::Q16, self.goals)
    }
}

/// The ordered rule set. All matching rules fire, in this order.
pub static TOOL_RULES: &[ToolRule] = &[
    ToolRule {
        systems: &["Microsoft 365 (Office, Teams)"],
        tools: &["Microsoft Copilot"],
        goals: &["Automate repetitive tasks (e.g., code gen, workflows)"],
        message: "High fit for Copilot: Integrate with Teams for workflows.",
    },
    ToolRule {
        systems: &["Google Workspace (Docs, Sheets)"],
        tools: &["Google Gemini"],
        goals: &["Enhance data analysis/insights"],
        message: "High fit for Gemini: Use with Sheets for insights.",
    },
    ToolRule {
        systems: &[],
        tools: &["ChatGPT/OpenAI"],
        goals: &["Custom app development"],
        message: "Medium fit for ChatGPT: Great for prototyping via API.",
    },
];

/// Evaluates every rule; falls back to [`NO_MATCH_MESSAGE`] when none match.
pub fn match_tools(answers: &AnswerSet) -> Vec<String> {
    let matches: Vec<String> = TOOL_RULES
        .iter()
        .filter(|rule| rule.matches(answers))
        .map(|rule| rule.message.to_string())
        .collect();

    if matches.is_empty() {
        vec![NO_MATCH_MESSAGE.to_string()]
    } else {
        matches
    }
}

fn contains_all(answers: &AnswerSet, step: Step, required: &[&str]) -> bool {
    if required.is_empty() {
        return true;
    }
    match answers.selections(step) {
        Some(selected) => required
            .iter()
            .all(|needle| selected.iter().any(|s| s == needle)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::AnswerValue;

    fn record_selections(answers: &mut AnswerSet, step: Step, values: &[&str]) {
        answers.record(
            step,
            AnswerValue::Selections(values.iter().map(|s| s.to_string()).collect()),
        );
    }

    fn copilot_fit() -> AnswerSet {
        let mut answers = AnswerSet::new();
        record_selections(&mut answers, Step::Q14, &["Microsoft 365 (Office, Teams)"]);
        record_selections(&mut answers, Step::Q15, &["Microsoft Copilot"]);
        record_selections(
            &mut answers,
            Step::Q16,
            &["Automate repetitive tasks (e.g., code gen, workflows)"],
        );
        answers
    }

    #[test]
    fn copilot_rule_fires_alone() {
        let matches = match_tools(&copilot_fit());
        assert_eq!(
            matches,
            vec!["High fit for Copilot: Integrate with Teams for workflows.".to_string()]
        );
    }

    #[test]
    fn gemini_rule_requires_all_three_conditions() {
        let mut answers = AnswerSet::new();
        record_selections(&mut answers, Step::Q14, &["Google Workspace (Docs, Sheets)"]);
        record_selections(&mut answers, Step::Q15, &["Google Gemini"]);
        // Goal missing: the rule must not fire.
        record_selections(&mut answers, Step::Q16, &["Custom app development"]);
        assert_eq!(match_tools(&answers), vec![NO_MATCH_MESSAGE.to_string()]);

        record_selections(&mut answers, Step::Q16, &["Enhance data analysis/insights"]);
        assert_eq!(
            match_tools(&answers),
            vec!["High fit for Gemini: Use with Sheets for insights.".to_string()]
        );
    }

    #[test]
    fn chatgpt_rule_needs_no_core_system() {
        let mut answers = AnswerSet::new();
        record_selections(&mut answers, Step::Q14, &[]);
        record_selections(&mut answers, Step::Q15, &["ChatGPT/OpenAI"]);
        record_selections(&mut answers, Step::Q16, &["Custom app development"]);
        assert_eq!(
            match_tools(&answers),
            vec!["Medium fit for ChatGPT: Great for prototyping via API.".to_string()]
        );
    }

    #[test]
    fn rules_are_independent_and_ordered() {
        let mut answers = copilot_fit();
        record_selections(
            &mut answers,
            Step::Q15,
            &["Microsoft Copilot", "ChatGPT/OpenAI"],
        );
        record_selections(
            &mut answers,
            Step::Q16,
            &[
                "Automate repetitive tasks (e.g., code gen, workflows)",
                "Custom app development",
            ],
        );

        let matches = match_tools(&answers);
        assert_eq!(matches.len(), 2);
        assert!(matches[0].contains("Copilot"));
        assert!(matches[1].contains("ChatGPT"));
    }

    #[test]
    fn no_overlap_yields_exactly_the_fallback() {
        let mut answers = AnswerSet::new();
        record_selections(&mut answers, Step::Q14, &["None yet"]);
        record_selections(&mut answers, Step::Q15, &["None"]);
        record_selections(&mut answers, Step::Q16, &["Other"]);
        assert_eq!(match_tools(&answers), vec![NO_MATCH_MESSAGE.to_string()]);
    }

    #[test]
    fn missing_selections_never_match_a_requirement() {
        assert_eq!(match_tools(&AnswerSet::new()), vec![NO_MATCH_MESSAGE.to_string()]);
    }
}
