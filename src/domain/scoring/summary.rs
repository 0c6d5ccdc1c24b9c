//! Plain-text summary of a score report.
//!
//! A pure view-model: the rendering surface can print these lines verbatim.
//! No styling, no branding, just the numbers the respondent cares about.

use super::report::ScoreReport;

/// Width of a category bar (one `#` per whole point of 10).
const BAR_WIDTH: usize = 10;

/// Tip shown when the overall score is at most 6.
const TIP_BUILD: &str =
    "Tips: Focus on building an AI strategy and upskilling to reduce risks.";

/// Tip shown for stronger overall scores.
const TIP_OPTIMIZE: &str =
    "Tips: You're in a strong position—optimize with advanced integrations.";

/// Renders one category as a fixed-width text bar, e.g.
/// `Organizational: [######----] 6.7`.
fn bar_line(name: &str, score: f64) -> String {
    let filled = (score.trunc() as usize).min(BAR_WIDTH);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled));
    format!("{:<12}: [{}] {:.1}", name, bar, score)
}

/// Renders the per-category radar bars in presentation order.
pub fn category_bars(report: &ScoreReport) -> Vec<String> {
    report
        .categories()
        .iter()
        .map(|(name, score)| bar_line(name, *score))
        .collect()
}

/// Picks the closing tip for a report.
pub fn closing_tip(report: &ScoreReport) -> &'static str {
    if report.overall <= 6.0 {
        TIP_BUILD
    } else {
        TIP_OPTIMIZE
    }
}

/// Renders the full text summary: headline scores, category breakdown,
/// radar bars, recommendations, and the closing tip.
pub fn render_lines(report: &ScoreReport) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Overall Maturity Score: {:.1}/10", report.overall));
    lines.push(format!("Risk Level: {}", report.risk.label()));
    lines.push("Category Breakdown:".to_string());
    for (name, score) in report.categories() {
        lines.push(format!("- {}: {:.1}/10", name, score));
    }
    lines.push("Text Radar Chart (Higher = Better Maturity):".to_string());
    lines.extend(category_bars(report));
    lines.push("AI Tool Matches & Recommendations:".to_string());
    for recommendation in &report.recommendations {
        lines.push(format!("- {}", recommendation));
    }
    lines.push(closing_tip(report).to_string());
    lines
}
