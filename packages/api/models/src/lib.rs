#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Request and response types for the legal portal backend API.
//!
//! Every endpoint the portal consumes has an explicit type here. Field
//! names mirror the backend's JSON exactly (including the NCRB column
//! names such as `"TOTAL IPC CRIMES"`), and every consumed field is
//! required so that a malformed payload fails to decode instead of
//! rendering blanks.

mod ordered_map;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

pub use ordered_map::OrderedMap;

/// Case counts keyed by crime category, in the order the backend sent them.
pub type CrimeTotals = OrderedMap<i64>;

// ── Crime statistics ─────────────────────────────────────────────────────

/// One row of `GET /api/crime/summary`: national IPC totals for a year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrimeSummaryRow {
    /// Reporting year, when the backend includes it.
    #[serde(rename = "YEAR", default)]
    pub year: Option<i32>,
    /// Total IPC crimes reported.
    #[serde(rename = "TOTAL IPC CRIMES")]
    pub total_ipc_crimes: i64,
}

/// Filter reference data from `GET /api/ipc/records`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRecords {
    /// Years with data, ascending.
    pub available_years: Vec<i32>,
    /// States/UTs with data, sorted by name.
    pub available_states: Vec<String>,
}

/// Response of `GET /api/ipc/dashboard?year=&state=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpcDashboard {
    /// Case counts per IPC crime head for the selected year and state.
    pub crime_totals: CrimeTotals,
}

/// One row of `GET /api/ipc/districts?year=&state=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictRow {
    /// District name.
    #[serde(rename = "DISTRICT")]
    pub district: String,
    /// Total IPC crimes in the district.
    #[serde(rename = "TOTAL IPC CRIMES")]
    pub total_ipc_crimes: i64,
}

/// Unfiltered response of `GET /api/women/dashboard`, used for the
/// initial filter options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WomenReference {
    /// Years with data.
    pub available_years: Vec<i32>,
    /// States with data.
    pub available_states: Vec<String>,
}

/// Filtered response of `GET /api/women/dashboard?year=&state=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WomenDashboard {
    /// Years with data.
    pub available_years: Vec<i32>,
    /// States with data.
    pub available_states: Vec<String>,
    /// Case counts per crime-against-women head.
    pub crime_totals: CrimeTotals,
}

// ── IPC assistant ────────────────────────────────────────────────────────

/// A statutory section returned by `GET /api/ipc/assistant/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpcSection {
    /// Section number, e.g. `"302"`.
    pub section: String,
    /// Section heading.
    pub title: String,
    /// Statutory text.
    pub law_text: String,
}

/// Body of `POST /api/ipc/assistant/explain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainRequest {
    /// Section number to explain.
    pub section: String,
}

/// Response of `POST /api/ipc/assistant/explain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainedSection {
    /// Section number.
    pub section: String,
    /// Section heading.
    pub title: String,
    /// Statutory text.
    pub law_text: String,
    /// Plain-language explanation.
    pub simple_explanation: String,
}

// ── Supreme Court judgments ──────────────────────────────────────────────

/// Body of `POST /api/sc/query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentQuery {
    /// The user's legal question.
    pub question: String,
}

/// Backend's own confidence label for a judgment match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Confidence {
    /// Strong match.
    High,
    /// Partial match.
    Medium,
    /// Weak match.
    Low,
}

/// Response of `POST /api/sc/query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentAnswer {
    /// How closely the stored question matched, 0-100.
    pub match_percentage: f64,
    /// Backend confidence label.
    pub confidence: Confidence,
    /// Name of the matched judgment.
    pub case_name: String,
    /// Date of the judgment as sent by the backend.
    pub judgment_date: String,
    /// The stored question that matched.
    pub matched_question: String,
    /// Answer extracted from the judgment.
    pub answer: String,
}

// ── Case outcome predictor ───────────────────────────────────────────────

/// Kind of case submitted to the predictor.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum CaseType {
    /// Criminal prosecution.
    Criminal,
    /// Civil dispute.
    Civil,
    /// Family matter.
    Family,
    /// Property dispute.
    Property,
}

/// How strong the available evidence is.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum EvidenceStrength {
    /// Documentary and testimonial support.
    Strong,
    /// Some support.
    #[default]
    Moderate,
    /// Little support.
    Weak,
}

/// The accused's prior criminal record.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PastRecord {
    /// No prior record.
    #[default]
    None,
    /// Minor prior offences.
    Minor,
    /// Serious prior offences.
    Serious,
}

/// Body of `POST /api/case/predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDetails {
    /// Kind of case.
    pub case_type: CaseType,
    /// Relevant IPC section, free text (e.g. `"IPC 420"`).
    pub ipc_section: String,
    /// Summary of the facts.
    pub case_facts_summary: String,
    /// Evidence strength.
    pub evidence_strength: EvidenceStrength,
    /// Prior record.
    pub past_record: PastRecord,
}

/// Headline outcome inside a [`PredictionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleOutcome {
    /// Probability as displayed by the backend, e.g. `"75%"`.
    pub probability: String,
    /// Predicted result, e.g. `"Conviction"`.
    pub result: String,
    /// Short justification.
    pub basis: String,
}

/// Response of `POST /api/case/predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Headline outcome.
    pub possible_outcome: PossibleOutcome,
    /// Factors the model weighed.
    pub key_factors: Vec<String>,
    /// Narrative reasoning.
    pub ai_reasoning: String,
    /// Educational disclaimer.
    pub disclaimer: String,
    /// Suggested next steps. Older backends omit this list.
    #[serde(default)]
    pub next_steps: Vec<String>,
}

// ── Legal awareness ──────────────────────────────────────────────────────

/// A single right or protection within an awareness category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwarenessItem {
    /// Short title of the right.
    pub title: String,
    /// Plain-language description.
    pub description: String,
    /// Governing law or section.
    pub law: String,
}

/// Response of `GET /api/legal-awareness`: items grouped by category.
pub type AwarenessContent = OrderedMap<Vec<AwarenessItem>>;

/// One entry of `GET /api/legal-faqs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    /// Question.
    pub question: String,
    /// Answer.
    pub answer: String,
    /// Governing law.
    pub law: String,
}

/// A single helpline number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelplineService {
    /// Service name, e.g. `"Women Helpline"`.
    #[serde(rename = "type")]
    pub service_type: String,
    /// Number to dial.
    pub number: String,
}

/// One entry of `GET /api/helplines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Helpline {
    /// State name, or `"All India"` for national numbers.
    pub state: String,
    /// Numbers available in that state.
    pub services: Vec<HelplineService>,
}

/// State name the backend uses for nationwide helplines.
pub const ALL_INDIA: &str = "All India";

// ── Service ──────────────────────────────────────────────────────────────

/// Response of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Human-readable status line.
    pub status: String,
    /// Rows in the IPC dataset.
    pub ipc_rows: u64,
    /// Rows in the crimes-against-women dataset.
    pub women_rows: u64,
    /// Stored judgments.
    pub judgments: u64,
    /// Indexed IPC sections.
    pub ipc_sections: u64,
    /// Helpline entries.
    pub helplines: u64,
}

/// Error body the backend sends with non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Error text.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn decodes_summary_rows_with_exact_column_names() {
        let rows: Vec<CrimeSummaryRow> = serde_json::from_value(serde_json::json!([
            {"YEAR": 2019, "TOTAL IPC CRIMES": 100},
            {"TOTAL IPC CRIMES": 7}
        ]))
        .unwrap();

        assert_eq!(rows[0].year, Some(2019));
        assert_eq!(rows[0].total_ipc_crimes, 100);
        assert_eq!(rows[1].year, None);
    }

    #[test]
    fn rejects_summary_row_with_renamed_column() {
        let result: Result<Vec<CrimeSummaryRow>, _> =
            serde_json::from_value(serde_json::json!([{"total_ipc_crimes": 100}]));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_dashboard_without_crime_totals() {
        let result: Result<WomenDashboard, _> = serde_json::from_value(serde_json::json!({
            "available_years": [2019],
            "available_states": ["Goa"],
        }));
        assert!(result.is_err());
    }

    #[test]
    fn decodes_judgment_answer() {
        let answer: JudgmentAnswer = serde_json::from_value(serde_json::json!({
            "user_question": "is bail a right",
            "match_percentage": 72,
            "confidence": "High",
            "case_name": "State v. X",
            "judgment_date": "2001-02-03",
            "matched_question": "is bail a right?",
            "answer": "Bail is the rule.",
        }))
        .unwrap();

        assert!((answer.match_percentage - 72.0).abs() < f64::EPSILON);
        assert_eq!(answer.confidence, Confidence::High);
    }

    #[test]
    fn rejects_judgment_answer_with_unknown_confidence() {
        let result: Result<JudgmentAnswer, _> = serde_json::from_value(serde_json::json!({
            "match_percentage": 72,
            "confidence": "Certain",
            "case_name": "State v. X",
            "judgment_date": "2001-02-03",
            "matched_question": "q",
            "answer": "a",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_case_details_with_backend_field_names() {
        let details = CaseDetails {
            case_type: CaseType::Criminal,
            ipc_section: "IPC 420".to_string(),
            case_facts_summary: "Cheating".to_string(),
            evidence_strength: EvidenceStrength::default(),
            past_record: PastRecord::default(),
        };

        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            serde_json::json!({
                "case_type": "Criminal",
                "ipc_section": "IPC 420",
                "case_facts_summary": "Cheating",
                "evidence_strength": "Moderate",
                "past_record": "None",
            })
        );
    }

    #[test]
    fn parses_form_enums_case_insensitively() {
        assert_eq!(CaseType::from_str("family").unwrap(), CaseType::Family);
        assert_eq!(
            EvidenceStrength::from_str("STRONG").unwrap(),
            EvidenceStrength::Strong
        );
        assert_eq!(PastRecord::from_str("serious").unwrap(), PastRecord::Serious);
        assert!(CaseType::from_str("criminal law").is_err());
    }

    #[test]
    fn prediction_without_next_steps_decodes_to_empty_list() {
        let prediction: PredictionResult = serde_json::from_value(serde_json::json!({
            "possible_outcome": {"probability": "75%", "result": "Conviction", "basis": "b"},
            "key_factors": ["Strength of available evidence"],
            "ai_reasoning": "r",
            "disclaimer": "d",
        }))
        .unwrap();

        assert!(prediction.next_steps.is_empty());
        assert_eq!(prediction.possible_outcome.result, "Conviction");
    }

    #[test]
    fn decodes_helpline_service_type_field() {
        let lines: Vec<Helpline> = serde_json::from_value(serde_json::json!([
            {"state": "All India", "services": [{"type": "Police", "number": "112"}]}
        ]))
        .unwrap();

        assert_eq!(lines[0].state, ALL_INDIA);
        assert_eq!(lines[0].services[0].service_type, "Police");
    }
}
