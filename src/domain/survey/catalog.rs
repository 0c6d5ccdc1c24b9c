//! The static question catalog.
//!
//! All questions, prompts, and option lists are fixed at compile time.
//! [`question_for`] is the single lookup point; [`self_check`] validates the
//! catalog against the step graph once at startup.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::DomainError;

use super::question::{InputSpec, Question};
use super::Step;

/// Cap on goal selections for the final question.
pub const GOAL_SELECTION_CAP: usize = 3;

/// Advisory shown once after an "Over 7,000" employee-count answer.
pub const LARGE_ORG_ADVISORY: &str =
    "Note: This tool is optimized for mid-market; results may vary for larger firms.";

/// The full questionnaire, in presentation order.
pub static QUESTIONS: &[Question] = &[
    Question {
        step: Step::Q1,
        prompt: "Q1: How many employees does your organization have?",
        input: InputSpec::SingleChoice {
            options: &["Under 500", "500-2,000", "2,001-7,000", "Over 7,000"],
        },
    },
    Question {
        step: Step::Q2,
        prompt: "Q2: What industry best describes your organization?",
        input: InputSpec::SingleChoice {
            options: &[
                "Tech/Software",
                "Manufacturing",
                "Healthcare",
                "Finance",
                "Retail",
                "Professional Services",
                "Other (specify)",
            ],
        },
    },
    Question {
        step: Step::Q3,
        prompt: "Q3: Does your company have a formal AI strategy or roadmap?",
        input: InputSpec::SingleChoice {
            options: &[
                "Yes, fully documented and implemented",
                "Partial (e.g., in planning)",
                "No, but we're exploring",
                "No",
            ],
        },
    },
    Question {
        step: Step::Q3Follow,
        prompt: "Follow-up: Is this a current barrier or one you expect in the next 1-2 years?",
        input: InputSpec::SingleChoice {
            options: &["Current", "Future", "Neither"],
        },
    },
    Question {
        step: Step::Q4,
        prompt: "Q4: On a scale of 1-5, how resistant is your team to adopting new AI tools \
                 (1=No resistance, 5=High resistance)?",
        input: InputSpec::NumericScale { min: 1, max: 5 },
    },
    Question {
        step: Step::Q5,
        prompt: "Q5: How often does bureaucracy or approval processes delay tech experiments?",
        input: InputSpec::SingleChoice {
            options: &["Rarely", "Sometimes", "Often", "Always"],
        },
    },
    Question {
        step: Step::Q6,
        prompt: "Q6: How many team members are trained or experienced in using AI tools?",
        input: InputSpec::SingleChoice {
            options: &["None", "1-10", "11-50", "More than 50", "Unsure"],
        },
    },
    Question {
        step: Step::Q6Follow,
        prompt: "Follow-up: Do you plan to hire or upskill in the next year?",
        input: InputSpec::SingleChoice {
            options: &["Yes", "No", "Maybe"],
        },
    },
    Question {
        step: Step::Q7,
        prompt: "Q7: Is finding AI-skilled talent a challenge for your organization today?",
        input: InputSpec::SingleChoice {
            options: &["Yes, major issue", "Somewhat", "No"],
        },
    },
    Question {
        step: Step::Q8,
        prompt: "Q8: What budget do you allocate annually for AI training/upskilling \
                 (as a % of total IT budget)?",
        input: InputSpec::SingleChoice {
            options: &["Less than 5%", "5-10%", "Over 10%", "None", "Unsure"],
        },
    },
    Question {
        step: Step::Q9,
        prompt: "Q9: Have you piloted AI tools and encountered issues like inaccurate outputs?",
        input: InputSpec::SingleChoice {
            options: &["Yes, frequently", "Occasionally", "No, not yet", "Haven't piloted"],
        },
    },
    Question {
        step: Step::Q9Follow,
        prompt: "Follow-up: Briefly describe an example (optional):",
        input: InputSpec::FreeText,
    },
    Question {
        step: Step::Q10,
        prompt: "Q10: On a scale of 1-5, how prepared is your infrastructure for AI scaling \
                 (1=Not prepared, 5=Fully)?",
        input: InputSpec::NumericScale { min: 1, max: 5 },
    },
    Question {
        step: Step::Q11,
        prompt: "Q11: Do ethical concerns (e.g., bias in AI) impact your adoption today or in \
                 the future?",
        input: InputSpec::SingleChoice {
            options: &["Current impact", "Future impact", "Neither", "Both"],
        },
    },
    Question {
        step: Step::Q12,
        prompt: "Q12: Has AI integration delivered measurable ROI in your pilots?",
        input: InputSpec::SingleChoice {
            options: &["Yes, significant", "Some", "Minimal or none", "Haven't measured"],
        },
    },
    Question {
        step: Step::Q13,
        prompt: "Q13: How well do generic AI tools fit your specific workflows without \
                 customization?",
        input: InputSpec::SingleChoice {
            options: &["Very well", "Adequately", "Poorly", "Not sure"],
        },
    },
    Question {
        step: Step::Q14,
        prompt: "Q14: Which core systems does your tech foundation include? \
                 (Select all that apply)",
        input: InputSpec::MultiChoice {
            options: &[
                "Microsoft 365 (Office, Teams)",
                "Google Workspace (Docs, Sheets)",
                "CRM (e.g., Salesforce, HubSpot)",
                "ERP (e.g., SAP, Oracle)",
                "Custom/internal apps",
                "Cloud platforms (e.g., AWS, Azure)",
                "None yet",
                "Other",
            ],
            max_selections: None,
        },
    },
    Question {
        step: Step::Q15,
        prompt: "Q15: Which AI tools are you already using or considering? \
                 (Select all that apply)",
        input: InputSpec::MultiChoice {
            options: &[
                "ChatGPT/OpenAI",
                "Microsoft Copilot",
                "Google Gemini",
                "Anthropic Claude",
                "xAI Grok",
                "None",
                "Other",
            ],
            max_selections: None,
        },
    },
    Question {
        step: Step::Q16,
        prompt: "Q16: What are your primary goals for AI integration? (Select up to 3)",
        input: InputSpec::MultiChoice {
            options: &[
                "Automate repetitive tasks (e.g., code gen, workflows)",
                "Enhance data analysis/insights",
                "Improve customer support/chatbots",
                "Boost collaboration/productivity",
                "Custom app development",
                "Other",
            ],
            max_selections: Some(GOAL_SELECTION_CAP),
        },
    },
];

static INDEX: Lazy<HashMap<Step, &'static Question>> =
    Lazy::new(|| QUESTIONS.iter().map(|q| (q.step, q)).collect());

/// Returns the question for a step, or `None` for synthetic steps.
pub fn question_for(step: Step) -> Option<&'static Question> {
    INDEX.get(&step).copied()
}

/// Validates the catalog against the step graph.
///
/// Run once at startup; an error here is a fatal configuration defect,
/// never a per-request condition.
///
/// # Errors
///
/// - `UnknownStep` if a question step lacks a catalog entry, a synthetic
///   step has one, a step is defined twice, or a choice question has an
///   empty option list
pub fn self_check() -> Result<(), DomainError> {
    if INDEX.len() != QUESTIONS.len() {
        return Err(DomainError::unknown_step("Duplicate step in question catalog"));
    }

    for step in Step::all() {
        match (step.is_question(), question_for(*step)) {
            (true, None) => {
                return Err(DomainError::unknown_step(format!(
                    "Step {} has no catalog entry",
                    step
                )));
            }
            (false, Some(_)) => {
                return Err(DomainError::unknown_step(format!(
                    "Synthetic step {} must not have a catalog entry",
                    step
                )));
            }
            _ => {}
        }
    }

    for question in QUESTIONS {
        match question.input {
            InputSpec::SingleChoice { options } | InputSpec::MultiChoice { options, .. } => {
                if options.is_empty() {
                    return Err(DomainError::unknown_step(format!(
                        "Choice question {} has no options",
                        question.step
                    )));
                }
            }
            InputSpec::NumericScale { min, max } => {
                if min >= max {
                    return Err(DomainError::unknown_step(format!(
                        "Scale question {} has an empty range",
                        question.step
                    )));
                }
            }
            InputSpec::FreeText => {}
        }
    }

    Ok(())
}
