//! Minimum match confidence for surfacing a judgment answer.
//!
//! The judgment explorer only shows an answer when the backend's match
//! percentage is at least [`MIN_MATCH_PERCENTAGE`], whatever else the
//! backend returned.

use legal_portal_api_models::JudgmentAnswer;

/// Lowest match percentage that passes. Inclusive.
pub const MIN_MATCH_PERCENTAGE: f64 = 50.0;

/// Shown instead of an answer that fails the gate.
pub const LOW_CONFIDENCE_MESSAGE: &str = "No sufficiently relevant Supreme Court judgment found for this question. Try rephrasing using legal terms.";

/// Result of checking an answer against the gate.
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    /// The answer may be shown.
    Pass(JudgmentAnswer),
    /// The match was too weak; show [`LOW_CONFIDENCE_MESSAGE`] instead.
    LowConfidence {
        /// The rejected score.
        match_percentage: f64,
    },
}

/// Whether a score passes. Non-finite scores never pass.
#[must_use]
pub fn passes(match_percentage: f64) -> bool {
    match_percentage.is_finite() && match_percentage >= MIN_MATCH_PERCENTAGE
}

/// Applies the gate to a backend answer.
#[must_use]
pub fn check(answer: JudgmentAnswer) -> GateOutcome {
    if passes(answer.match_percentage) {
        GateOutcome::Pass(answer)
    } else {
        log::debug!(
            "Judgment match {}% below threshold for {:?}",
            answer.match_percentage,
            answer.case_name
        );
        GateOutcome::LowConfidence {
            match_percentage: answer.match_percentage,
        }
    }
}
