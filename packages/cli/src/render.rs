//! Plain-text rendering of page view models.
//!
//! Every function returns the text to print so layouts can be tested
//! without a terminal.

use legal_portal_api_models::{
    AwarenessItem, CrimeSummaryRow, DistrictRow, ExplainedSection, Faq, HealthStatus, Helpline,
    IpcSection, JudgmentAnswer, PredictionResult,
};
use legal_portal_views::derive::DerivedCrimeEntry;
use legal_portal_views::{FilterSelection, LoadingState};

/// Width of the longest bar in a chart, in cells.
const BAR_WIDTH: usize = 40;

/// Longest title shown in a table before truncation.
const MAX_TITLE_LEN: usize = 60;

/// Formats `n` with comma thousands separators.
#[must_use]
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// A bar proportional to `value / max`. Positive values always get at
/// least one cell.
#[must_use]
pub fn bar(value: i64, max: i64, width: usize) -> String {
    if max <= 0 || value <= 0 {
        return String::new();
    }
    let width_i = i64::try_from(width).unwrap_or(i64::MAX);
    let filled = value.min(max).saturating_mul(width_i) / max;
    let filled = usize::try_from(filled).unwrap_or(width).max(1);
    "█".repeat(filled)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn heading(title: &str) -> String {
    format!("\n{title}\n{}", "-".repeat(title.chars().count().max(20)))
}

/// Inline notice for a failed or rejected request.
#[must_use]
pub fn notice(state: &LoadingState) -> Option<String> {
    state.error().map(|message| format!("⚠ {message}"))
}

/// The active year/state filter.
#[must_use]
pub fn filter_line(filter: &FilterSelection) -> String {
    let year = filter
        .year
        .map_or_else(|| "-".to_string(), |y| y.to_string());
    let state = filter.state.as_deref().unwrap_or("-");
    format!("Year: {year}   State: {state}")
}

/// Label for charts that still show an earlier selection's data, e.g.
/// after the request for `current` failed.
#[must_use]
pub fn shown_for(current: &FilterSelection, shown: Option<&FilterSelection>) -> Option<String> {
    let shown = shown.filter(|shown| *shown != current)?;
    Some(format!("Showing previous data for {}", filter_line(shown)))
}

/// Headline card plus the per-year table.
#[must_use]
pub fn overview(rows: &[CrimeSummaryRow], total: i64) -> String {
    let mut lines = vec![
        heading("Legal Portal Overview"),
        format!("Total crime reports: {}", format_count(total)),
    ];
    if !rows.is_empty() {
        lines.push(String::new());
        lines.push(format!("{:<8} {:>16}", "YEAR", "TOTAL IPC CRIMES"));
        lines.push("-".repeat(25));
        for row in rows {
            let year = row.year.map_or_else(|| "-".to_string(), |y| y.to_string());
            lines.push(format!(
                "{year:<8} {:>16}",
                format_count(row.total_ipc_crimes)
            ));
        }
    }
    lines.join("\n")
}

/// Horizontal bar chart with each entry's palette colour.
#[must_use]
pub fn crime_chart(title: &str, entries: &[DerivedCrimeEntry]) -> String {
    let mut lines = vec![heading(title)];
    if entries.is_empty() {
        lines.push("No cases recorded for this selection.".to_string());
        return lines.join("\n");
    }

    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);
    let max = entries.iter().map(|e| e.value).max().unwrap_or(0);

    for entry in entries {
        lines.push(format!(
            "{:<name_width$} {:<7} {:>10} {}",
            entry.name,
            entry.color,
            format_count(entry.value),
            bar(entry.value, max, BAR_WIDTH),
        ));
    }
    lines.join("\n")
}

/// District ranking as a bar chart.
#[must_use]
pub fn district_chart(rows: &[DistrictRow]) -> String {
    let mut lines = vec![heading("Top districts")];
    if rows.is_empty() {
        lines.push("No district data for this selection.".to_string());
        return lines.join("\n");
    }

    let name_width = rows
        .iter()
        .map(|r| r.district.chars().count())
        .max()
        .unwrap_or(0);
    let max = rows.iter().map(|r| r.total_ipc_crimes).max().unwrap_or(0);

    for row in rows {
        lines.push(format!(
            "{:<name_width$} {:>10} {}",
            row.district,
            format_count(row.total_ipc_crimes),
            bar(row.total_ipc_crimes, max, BAR_WIDTH),
        ));
    }
    lines.join("\n")
}

/// Search results table.
#[must_use]
pub fn section_list(sections: &[IpcSection]) -> String {
    if sections.is_empty() {
        return "No matching sections.".to_string();
    }
    let mut lines = vec![format!("{:<10} TITLE", "SECTION"), "-".repeat(72)];
    for section in sections {
        lines.push(format!(
            "{:<10} {}",
            section.section,
            truncate(&section.title, MAX_TITLE_LEN)
        ));
    }
    lines.push(format!("\n{} section(s)", sections.len()));
    lines.join("\n")
}

/// Explanation card for one section.
#[must_use]
pub fn explanation(section: &ExplainedSection) -> String {
    [
        heading(&format!("IPC Section {}: {}", section.section, section.title)),
        section.law_text.clone(),
        String::new(),
        "In simple terms:".to_string(),
        section.simple_explanation.clone(),
    ]
    .join("\n")
}

/// Judgment answer card.
#[must_use]
pub fn judgment(answer: &JudgmentAnswer) -> String {
    [
        heading(&answer.case_name),
        format!("Judgment date:   {}", answer.judgment_date),
        format!(
            "Match:           {:.1}% ({})",
            answer.match_percentage, answer.confidence
        ),
        format!("Matched question: {}", answer.matched_question),
        String::new(),
        answer.answer.clone(),
    ]
    .join("\n")
}

/// Prediction card.
#[must_use]
pub fn prediction(result: &PredictionResult) -> String {
    let outcome = &result.possible_outcome;
    let mut lines = vec![
        heading("Predicted outcome"),
        format!("{} ({})", outcome.result, outcome.probability),
        outcome.basis.clone(),
        String::new(),
        "Key factors:".to_string(),
    ];
    lines.extend(result.key_factors.iter().map(|f| format!("  • {f}")));
    lines.push(String::new());
    lines.push(result.ai_reasoning.clone());
    if !result.next_steps.is_empty() {
        lines.push(String::new());
        lines.push("Next steps:".to_string());
        lines.extend(
            result
                .next_steps
                .iter()
                .enumerate()
                .map(|(i, step)| format!("  {}. {step}", i + 1)),
        );
    }
    lines.push(String::new());
    lines.push(format!("Disclaimer: {}", result.disclaimer));
    lines.join("\n")
}

/// Rights within one awareness category.
#[must_use]
pub fn awareness_items(category: &str, items: &[AwarenessItem]) -> String {
    let mut lines = vec![heading(category)];
    for item in items {
        lines.push(format!("• {}", item.title));
        lines.push(format!("  {}", item.description));
        lines.push(format!("  Law: {}", item.law));
    }
    lines.join("\n")
}

/// FAQ list.
#[must_use]
pub fn faqs(faqs: &[Faq]) -> String {
    let mut lines = vec![heading("Frequently asked questions")];
    if faqs.is_empty() {
        lines.push("No FAQs available.".to_string());
    }
    for faq in faqs {
        lines.push(format!("Q: {}", faq.question));
        lines.push(format!("A: {}", faq.answer));
        lines.push(format!("   ({})", faq.law));
    }
    lines.join("\n")
}

fn helpline_block(lines: &mut Vec<String>, helpline: &Helpline) {
    lines.push(helpline.state.clone());
    for service in &helpline.services {
        lines.push(format!("  {:<32} {}", service.service_type, service.number));
    }
}

/// National helplines first, then one block per state.
#[must_use]
pub fn helplines(national: Option<&Helpline>, states: &[&Helpline]) -> String {
    let mut lines = vec![heading("Helplines")];
    if national.is_none() && states.is_empty() {
        lines.push("No helplines available.".to_string());
    }
    if let Some(national) = national {
        helpline_block(&mut lines, national);
    }
    for helpline in states {
        helpline_block(&mut lines, helpline);
    }
    lines.join("\n")
}

/// Backend health summary.
#[must_use]
pub fn health(status: &HealthStatus) -> String {
    [
        heading(&status.status),
        format!("IPC rows:      {}", format_count(to_i64(status.ipc_rows))),
        format!("Women rows:    {}", format_count(to_i64(status.women_rows))),
        format!("Judgments:     {}", format_count(to_i64(status.judgments))),
        format!("IPC sections:  {}", format_count(to_i64(status.ipc_sections))),
        format!("Helplines:     {}", format_count(to_i64(status.helplines))),
    ]
    .join("\n")
}

fn to_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
